/*!
Service attributes.

Descriptors own a snapshot of their attributes. The catalog builder keeps
one working map, mutates it between categories, and clones it into each
descriptor it creates.
*/

use std::collections::BTreeMap;

/// Sorted attribute name to value map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    entries: BTreeMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value
    pub fn insert(&mut self, name: &str, value: &str) -> &mut Self {
        self.entries.insert(name.to_string(), value.to_string());
        self
    }

    /// Remove an attribute
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Remove every attribute
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up an attribute value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_independent() {
        let mut working = Attributes::new();
        working.insert("KeySize", "1024");
        let snapshot = working.clone();

        working.insert("KeySize", "2048");
        working.remove("KeySize");

        assert_eq!(snapshot.get("KeySize"), Some("1024"));
        assert!(!working.contains("KeySize"));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let attributes: Attributes = [("ThreadSafe", "true"), ("ImplementedIn", "Software")]
            .into_iter()
            .collect();
        let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["ImplementedIn", "ThreadSafe"]);
        assert_eq!(attributes.len(), 2);
    }
}
