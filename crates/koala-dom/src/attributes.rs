//! [§ 4.9.2 Interface NamedNodeMap](https://dom.spec.whatwg.org/#interface-namednodemap)
//!
//! "An element has an associated attribute list, which is a list of
//! attributes." The list keeps source order; lookup by name is linear.

/// A single `name="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute's local name.
    pub name: String,
    /// The attribute's value (empty for boolean attributes like `disabled`).
    pub value: String,
}

/// Ordered attribute list with name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributesMap {
    entries: Vec<Attribute>,
}

impl AttributesMap {
    /// An empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Value of the attribute called `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Whether an attribute called `name` is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.iter().any(|attr| attr.name == name)
    }

    /// [§ 4.9 change an attribute](https://dom.spec.whatwg.org/#concept-element-attributes-change)
    ///
    /// Sets `name` to `value`. An existing attribute keeps its position in
    /// the list; a new one is appended. Returns the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.entries.iter_mut().find(|attr| attr.name == name) {
            return Some(std::mem::replace(&mut existing.value, value));
        }
        self.entries.push(Attribute { name, value });
        None
    }

    /// Iterate attributes in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributesMap {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributesMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            let _ = map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_first_position() {
        let mut attrs = AttributesMap::new();
        assert_eq!(attrs.insert("id", "a"), None);
        assert_eq!(attrs.insert("class", "x"), None);
        assert_eq!(attrs.insert("id", "b"), Some("a".to_string()));

        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["id", "class"]);
        assert_eq!(attrs.get("id"), Some("b"));
    }

    #[test]
    fn collects_from_pairs() {
        let attrs: AttributesMap = [("href", "/"), ("rel", "nofollow")].into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert!(attrs.contains_key("rel"));
        assert!(!attrs.contains_key("src"));
    }
}
