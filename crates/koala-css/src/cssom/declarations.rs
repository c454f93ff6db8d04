//! [CSSOM § 6.6 CSS Declaration Blocks](https://drafts.csswg.org/cssom/#css-declaration-blocks)
//!
//! Declaration blocks keep their declarations in the order they were
//! written. Custom properties (`--*`) live in the same list so their
//! position relative to other declarations survives.

/// [CSSOM § 6.6.1](https://drafts.csswg.org/cssom/#css-declaration)
///
/// "A CSS declaration is an abstract concept that is not exposed as an
/// object in the DOM. A CSS declaration has the following associated
/// properties: property name, value, important flag."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// "The property name of the declaration."
    pub name: String,
    /// "The value of the declaration represented as a list of component
    /// values." Stored here in its serialized form.
    pub value: String,
    /// "Either set or unset. Can be changed."
    pub important: bool,
}

impl StyleDeclaration {
    /// A normal (not `!important`) declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Mark the declaration `!important`.
    #[must_use]
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    /// [CSS Variables § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
    ///
    /// "A custom property is any property whose name starts with two dashes
    /// (U+002D HYPHEN-MINUS), like --foo."
    #[must_use]
    pub fn is_custom_property(&self) -> bool {
        self.name.starts_with("--")
    }
}

/// [CSSOM § 6.6.2 The CSSStyleDeclaration Interface](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
///
/// The declarations of a style rule, keyframe, margin rule or nested
/// declarations block. Known as `CSSStyleProperties` in the CSSOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProperties {
    declarations: Vec<StyleDeclaration>,
}

impl StyleProperties {
    /// An empty declaration block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// [CSSOM § 6.6.2 setProperty()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// Appends the declaration, or replaces an existing declaration of the
    /// same property in place.
    pub fn set(&mut self, declaration: StyleDeclaration) {
        match self
            .declarations
            .iter_mut()
            .find(|existing| existing.name == declaration.name)
        {
            Some(existing) => *existing = declaration,
            None => self.declarations.push(declaration),
        }
    }

    /// Builder form of [`StyleProperties::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(StyleDeclaration::new(name, value));
        self
    }

    /// Builder form of [`StyleProperties::set`] for `!important` values.
    #[must_use]
    pub fn with_important(mut self, name: &str, value: &str) -> Self {
        self.set(StyleDeclaration::new(name, value).important());
        self
    }

    /// [CSSOM § 6.6.2 getPropertyValue()](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleDeclaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Declarations in source order, custom properties included.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleDeclaration> {
        self.declarations.iter()
    }

    /// Only the custom properties, in source order.
    pub fn custom_properties(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations
            .iter()
            .filter(|d| d.is_custom_property())
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the block has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'a> IntoIterator for &'a StyleProperties {
    type Item = &'a StyleDeclaration;
    type IntoIter = std::slice::Iter<'a, StyleDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<StyleDeclaration> for StyleProperties {
    fn from_iter<I: IntoIterator<Item = StyleDeclaration>>(iter: I) -> Self {
        let mut properties = Self::new();
        for declaration in iter {
            properties.set(declaration);
        }
        properties
    }
}

/// An at-rule descriptor such as `font-family` inside `@font-face`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Descriptor name.
    pub name: String,
    /// Serialized descriptor value.
    pub value: String,
}

/// [CSSOM § 6.6.3 The CSSDescriptors Interface](https://drafts.csswg.org/cssom/#cssdescriptors)
///
/// Descriptor block of `@font-face` and `@page`, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptors {
    descriptors: Vec<Descriptor>,
}

impl Descriptors {
    /// An empty descriptor block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Set `name` to `value`, keeping the position of an existing entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.descriptors.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.value = value,
            None => self.descriptors.push(Descriptor { name, value }),
        }
    }

    /// Builder form of [`Descriptors::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Value of the descriptor called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.descriptors
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Descriptors in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the block has no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a Descriptors {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
