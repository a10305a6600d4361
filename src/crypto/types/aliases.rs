/*!
Standard alias table.

Object identifiers are registered twice: bare, and with the `OID.` prefix.
*/

/// Aliases for a standard algorithm name, empty if it has none
pub fn aliases_for(algorithm: &str) -> Vec<String> {
    let (names, oids): (&[&str], &[&str]) = match algorithm {
        "SHA1withDSA" => (
            &["DSA", "DSS", "SHA/DSA", "SHA-1/DSA", "SHA1/DSA", "SHAwithDSA", "DSAWithSHA1"],
            &["1.2.840.10040.4.3", "1.3.14.3.2.13", "1.3.14.3.2.27"],
        ),
        "NONEwithDSA" => (&["RawDSA"], &[]),
        "SHA224withDSA" => (&[], &["2.16.840.1.101.3.4.3.1"]),
        "SHA256withDSA" => (&[], &["2.16.840.1.101.3.4.3.2"]),
        "DSA" => (&[], &["1.2.840.10040.4.1", "1.3.14.3.2.12"]),
        "SHA-1" => (&["SHA", "SHA1"], &["1.3.14.3.2.26"]),
        "SHA-224" => (&["SHA224"], &["2.16.840.1.101.3.4.2.4"]),
        "SHA-256" => (&["SHA256"], &["2.16.840.1.101.3.4.2.1"]),
        "SHA-384" => (&["SHA384"], &["2.16.840.1.101.3.4.2.2"]),
        "SHA-512" => (&["SHA512"], &["2.16.840.1.101.3.4.2.3"]),
        "SHA-512/224" => (&["SHA512/224"], &["2.16.840.1.101.3.4.2.5"]),
        "SHA-512/256" => (&["SHA512/256"], &["2.16.840.1.101.3.4.2.6"]),
        "SHA3-224" => (&[], &["2.16.840.1.101.3.4.2.7"]),
        "SHA3-256" => (&[], &["2.16.840.1.101.3.4.2.8"]),
        "SHA3-384" => (&[], &["2.16.840.1.101.3.4.2.9"]),
        "SHA3-512" => (&[], &["2.16.840.1.101.3.4.2.10"]),
        "X.509" => (&["X509"], &[]),
        _ => (&[], &[]),
    };

    let mut aliases: Vec<String> = names.iter().map(|name| name.to_string()).collect();
    for oid in oids {
        aliases.push(oid.to_string());
        aliases.push(format!("OID.{}", oid));
    }
    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oids_registered_in_both_forms() {
        let aliases = aliases_for("SHA-256");
        assert_eq!(
            aliases,
            vec!["SHA256", "2.16.840.1.101.3.4.2.1", "OID.2.16.840.1.101.3.4.2.1"]
        );
    }

    #[test]
    fn test_unknown_algorithm_has_no_aliases() {
        assert!(aliases_for("MD5").is_empty());
        assert!(aliases_for("PKCS12").is_empty());
    }

    #[test]
    fn test_dsa_signature_aliases() {
        let aliases = aliases_for("SHA1withDSA");
        assert!(aliases.contains(&"DSA".to_string()));
        assert!(aliases.contains(&"OID.1.3.14.3.2.27".to_string()));
        assert_eq!(aliases.len(), 13);
    }
}
