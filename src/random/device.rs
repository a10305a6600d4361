/*!
Entropy device path resolution.

Turns a seed source URI such as `file:/dev/urandom` into a filesystem
path. Resolution is best-effort and never fails:

- hierarchical `file:` URIs resolve to their decoded path,
- opaque URIs (`file:dev/random`) are re-rooted at the working directory,
- anything that does not parse is used as a raw path, with the scheme,
  query and fragment stripped.
*/

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Syntactic pieces of a URI relevant to device resolution
#[derive(Debug, Clone, PartialEq, Eq)]
struct DeviceUri<'a> {
    scheme: Option<&'a str>,
    /// Everything after `scheme:` minus the fragment
    scheme_specific: &'a str,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl DeviceUri<'_> {
    /// Opaque URIs have a scheme and a scheme-specific part not starting with `/`
    fn is_opaque(&self) -> bool {
        self.scheme.is_some() && !self.scheme_specific.starts_with('/')
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split off `scheme:` if the prefix is a valid scheme
fn split_scheme(uri: &str) -> (Option<&str>, &str) {
    match uri.find(':') {
        Some(colon) if colon > 0 && !uri[..colon].contains(['/', '?', '#']) => {
            let candidate = &uri[..colon];
            if is_scheme(candidate) {
                (Some(candidate), &uri[colon + 1..])
            } else {
                (None, uri)
            }
        }
        _ => (None, uri),
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Reject characters a URI may not contain unescaped
fn check_characters(uri: &str) -> Result<()> {
    let bytes = uri.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'%' => {
                let escaped = bytes.get(i + 1..i + 3);
                if !escaped.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
                    return Err(Error::invalid_uri(uri, format!("malformed escape at index {}", i)));
                }
                i += 3;
                continue;
            }
            b' ' | b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'|' | b'}' => {
                return Err(Error::invalid_uri(
                    uri,
                    format!("illegal character '{}' at index {}", b as char, i),
                ));
            }
            b if b.is_ascii_control() => {
                return Err(Error::invalid_uri(uri, format!("control character at index {}", i)));
            }
            _ => {}
        }
        i += 1;
    }
    Ok(())
}

fn parse(uri: &str) -> Result<DeviceUri<'_>> {
    if uri.is_empty() {
        return Err(Error::invalid_uri(uri, "empty URI"));
    }
    check_characters(uri)?;

    let (without_fragment, fragment) = match uri.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (uri, None),
    };
    let (scheme, scheme_specific) = split_scheme(without_fragment);
    if scheme.is_some() && scheme_specific.is_empty() {
        return Err(Error::invalid_uri(uri, "expected scheme-specific part"));
    }

    let (hierarchical, query) = match scheme_specific.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (scheme_specific, None),
    };
    let (authority, path) = match hierarchical.strip_prefix("//") {
        Some(rest) => match rest.find('/') {
            Some(slash) => (Some(&rest[..slash]), &rest[slash..]),
            None => (Some(rest), ""),
        },
        None => (None, hierarchical),
    };

    Ok(DeviceUri {
        scheme,
        scheme_specific,
        authority,
        path,
        query,
        fragment,
    })
}

/// Decode `%XX` escapes; invalid UTF-8 is replaced
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Path component of a string that is not a valid URI
fn raw_path(uri: &str) -> PathBuf {
    let (_, rest) = split_scheme(uri);
    let rest = rest.split(['?', '#']).next().unwrap_or(rest);
    let rest = match rest.strip_prefix("//") {
        Some(authority_and_path) => match authority_and_path.find('/') {
            Some(slash) => &authority_and_path[slash..],
            None => "",
        },
        None => rest,
    };
    if rest.is_empty() { PathBuf::from(uri) } else { PathBuf::from(rest) }
}

/// Resolve a device URI against an explicit working directory
pub fn resolve_device_path_from(uri: &str, cwd: &Path) -> PathBuf {
    let parsed = match parse(uri) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("{}; using raw path", e);
            return raw_path(uri);
        }
    };

    if parsed.is_opaque() {
        let relative = parsed
            .scheme_specific
            .split('?')
            .next()
            .unwrap_or(parsed.scheme_specific);
        return cwd.join(percent_decode(relative));
    }

    let is_file = parsed.scheme.is_some_and(|scheme| scheme.eq_ignore_ascii_case("file"));
    let local = parsed.authority.is_none_or(str::is_empty);
    if is_file && local && parsed.query.is_none() && parsed.fragment.is_none() {
        let decoded = percent_decode(parsed.path);
        if !decoded.is_empty() {
            return PathBuf::from(decoded);
        }
    }

    log::debug!("'{}' is not a local file URI; using raw path", uri);
    raw_path(uri)
}

/// Resolve a device URI against the process working directory
///
/// Falls back to `.` if the working directory cannot be determined.
pub fn resolve_device_path(uri: &str) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        log::warn!("Cannot read working directory ({}); resolving against '.'", e);
        PathBuf::from(".")
    });
    resolve_device_path_from(uri, &cwd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchical_file_uri() {
        let cwd = Path::new("/home/user");
        assert_eq!(resolve_device_path_from("file:/dev/urandom", cwd), PathBuf::from("/dev/urandom"));
        assert_eq!(resolve_device_path_from("file:///dev/random", cwd), PathBuf::from("/dev/random"));
        assert_eq!(
            resolve_device_path_from("file:/dev/my%20random", cwd),
            PathBuf::from("/dev/my random")
        );
    }

    #[test]
    fn test_opaque_uri_is_relative_to_cwd() {
        let cwd = Path::new("/home/user");
        assert_eq!(
            resolve_device_path_from("file:dev/random", cwd),
            PathBuf::from("/home/user/dev/random")
        );
    }

    #[test]
    fn test_invalid_uri_uses_raw_path() {
        let cwd = Path::new("/home/user");
        assert_eq!(
            resolve_device_path_from("file:/dev/my random", cwd),
            PathBuf::from("/dev/my random")
        );
        assert_eq!(resolve_device_path_from("file:/dev/bad%zz", cwd), PathBuf::from("/dev/bad%zz"));
    }

    #[test]
    fn test_non_file_uri_uses_raw_path() {
        let cwd = Path::new("/home/user");
        assert_eq!(resolve_device_path_from("http://example/x", cwd), PathBuf::from("/x"));
        assert_eq!(resolve_device_path_from("file:/dev/urandom?x=1", cwd), PathBuf::from("/dev/urandom"));
    }

    #[test]
    fn test_empty_file_path_uses_input() {
        let cwd = Path::new("/home/user");
        assert_eq!(resolve_device_path_from("file://", cwd), PathBuf::from("file://"));
        assert_eq!(resolve_device_path_from("file:///", cwd), PathBuf::from("/"));
    }

    #[test]
    fn test_plain_path() {
        let cwd = Path::new("/home/user");
        assert_eq!(resolve_device_path_from("/dev/urandom", cwd), PathBuf::from("/dev/urandom"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("").is_err());
        assert!(parse("file:").is_err());
        assert!(matches!(parse("a b"), Err(Error::InvalidUri { .. })));
        assert!(parse("file:/dev/x%4").is_err());

        let parsed = parse("file://host/dev/random?q#f").unwrap();
        assert_eq!(parsed.scheme, Some("file"));
        assert_eq!(parsed.authority, Some("host"));
        assert_eq!(parsed.path, "/dev/random");
        assert_eq!(parsed.query, Some("q"));
        assert_eq!(parsed.fragment, Some("f"));
    }

    #[test]
    fn test_resolve_against_process_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_device_path("file:dev/random"), cwd.join("dev/random"));
    }
}
