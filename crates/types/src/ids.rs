//! Newtype wrapper for section identifiers
//!
//! A heading's `id` attribute and a sidebar link's fragment reference are both plain
//! strings in markup; wrapping them keeps the two sides comparable only with each other.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The identifier of a document section (a heading's `id` attribute).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Creates a new SectionId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Parses the target of a same-page fragment reference such as `#intro`.
    ///
    /// Returns `None` for references that do not start with `#` or that name no
    /// fragment at all (a bare `#`).
    pub fn from_fragment(href: &str) -> Option<Self> {
        match href.strip_prefix('#') {
            Some(fragment) if !fragment.is_empty() => Some(Self::new(fragment)),
            _ => None,
        }
    }

    /// Returns the string representation of this section ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the fragment reference (`#id`) that points at this section.
    pub fn to_fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for SectionId {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_creation() {
        let id1 = SectionId::new("intro");
        let id2 = SectionId::from("intro");
        let id3 = SectionId::from(String::from("intro"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "intro");
    }

    #[test]
    fn test_fragment_parsing() {
        assert_eq!(SectionId::from_fragment("#detail"), Some(SectionId::new("detail")));
        assert_eq!(SectionId::from_fragment("#"), None);
        assert_eq!(SectionId::from_fragment(""), None);
        assert_eq!(SectionId::from_fragment("/docs/page.html#detail"), None);
    }

    #[test]
    fn test_fragment_round_trip_keeps_text() {
        let id = SectionId::new("loops-and-iterators");
        assert_eq!(id.to_fragment(), "#loops-and-iterators");
    }

    #[test]
    fn test_hash_map_lookup_by_str() {
        use std::collections::HashMap;

        let mut links = HashMap::new();
        links.insert(SectionId::new("intro"), 0usize);
        links.insert(SectionId::new("summary"), 2usize);

        assert_eq!(links.get("summary"), Some(&2));
        assert_eq!(links.get("missing"), None);
    }
}
