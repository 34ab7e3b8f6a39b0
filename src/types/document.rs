use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;
use smol_str::SmolStr;

static EMPTY_SECTION: Section = Section::new();

/// Key/value entries of one INI section.
///
/// Keys are unique; the first assignment of a key wins and later ones are
/// dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Section {
    entries: BTreeMap<SmolStr, String>,
}

impl Section {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(SmolStr::as_str)
    }

    pub fn iter(&self) -> SectionIter<'_> {
        SectionIter {
            inner: self.entries.iter(),
        }
    }

    /// Returns false, leaving the stored value untouched, when `key` exists.
    pub(crate) fn insert_if_absent(&mut self, key: SmolStr, value: String) -> bool {
        match self.entries.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }
}

pub struct SectionIter<'a> {
    inner: btree_map::Iter<'a, SmolStr, String>,
}

impl<'a> Iterator for SectionIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a str, &'a str);
    type IntoIter = SectionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Parsed INI file: section names mapped to their entries.
///
/// Lookups come in two flavors. [`section`](Self::section) and
/// [`get`](Self::get) report absence with `None`; the `*_or_empty` variants
/// treat a missing section or key as empty, which is usually what
/// configuration readers want.
///
/// # Examples
/// ```
/// let doc = tinyini::parse_str("[server]\nhost = example.org\n");
///
/// assert_eq!(doc.get("server", "host"), Some("example.org"));
/// assert_eq!(doc.get("server", "port"), None);
/// assert_eq!(doc.value_or_empty("client", "port"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct IniDocument {
    sections: BTreeMap<SmolStr, Section>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_or_empty(&self, name: &str) -> &Section {
        self.section(name).unwrap_or(&EMPTY_SECTION)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|entries| entries.get(key))
    }

    pub fn value_or_empty(&self, section: &str, key: &str) -> &str {
        self.get(section, key).unwrap_or("")
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.keys().map(SmolStr::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> + '_ {
        self.sections
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Returns the section named `name`, creating it when missing. The flag
    /// is true when the section was created by this call.
    pub(crate) fn section_entry(&mut self, name: &str) -> (&mut Section, bool) {
        match self.sections.entry(SmolStr::new(name)) {
            btree_map::Entry::Vacant(slot) => (slot.insert(Section::new()), true),
            btree_map::Entry::Occupied(slot) => (slot.into_mut(), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IniDocument {
        let mut doc = IniDocument::new();
        let (section, created) = doc.section_entry("db");
        assert!(created);
        section.insert_if_absent("user".into(), "admin".to_string());
        section.insert_if_absent("port".into(), "5432".to_string());
        doc
    }

    #[rstest::rstest]
    fn test_insert_if_absent_keeps_first_value() {
        let mut section = Section::new();
        assert!(section.insert_if_absent("k".into(), "1".to_string()));
        assert!(!section.insert_if_absent("k".into(), "2".to_string()));
        assert!(section.contains_key("k"));
        assert!(!section.contains_key("j"));
        assert_eq!(section.get("k"), Some("1"));
        assert_eq!(section.len(), 1);
    }

    #[rstest::rstest]
    fn test_section_entry_reuses_existing() {
        let mut doc = sample();
        let (section, created) = doc.section_entry("db");
        assert!(!created);
        assert_eq!(section.len(), 2);
        assert_eq!(doc.len(), 1);
    }

    #[rstest::rstest]
    fn test_soft_miss_lookups() {
        let doc = sample();
        assert_eq!(doc.value_or_empty("db", "user"), "admin");
        assert_eq!(doc.value_or_empty("db", "password"), "");
        assert_eq!(doc.value_or_empty("cache", "user"), "");
        assert!(doc.section_or_empty("cache").is_empty());
        assert_eq!(doc.get("cache", "user"), None);
    }

    #[rstest::rstest]
    fn test_iteration_is_sorted() {
        let doc = sample();
        let entries: Vec<(&str, &str)> = doc.section_or_empty("db").iter().collect();
        assert_eq!(entries, vec![("port", "5432"), ("user", "admin")]);
        assert_eq!(doc.entry_count(), 2);
    }

    #[rstest::rstest]
    fn test_serializes_as_nested_maps() {
        let doc = sample();
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"db":{"port":"5432","user":"admin"}}"#);
    }
}
