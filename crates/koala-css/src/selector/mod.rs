//! CSS selector object model.
//!
//! This module implements the selector structures of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/): simple, compound
//! and complex selectors, combinators, and specificity. Selectors are built
//! by the style engine; this crate only stores them, computes their
//! specificity, and serializes them back to CSS syntax (see [`serialize`]).

pub mod serialize;

use std::ops::Add;

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Examples: `div`, `p`, `span`, `body`, `h1`
    Type(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    Universal,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.highlight`, `.btn`, `.nav-item`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#header`
    Id(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[type="text"]`, `[lang|="en"]`
    Attribute(AttributeSelector),

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:root`, `:hover`, `:nth-child(2n+1)`, `:not(.foo)`
    PseudoClass(PseudoClass),

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// The name is stored without the leading `::`.
    ///
    /// Examples: `::before`, `::marker`
    PseudoElement(String),

    /// [CSS Nesting § 2.2 The nesting selector](https://www.w3.org/TR/css-nesting-1/#nest-selector)
    /// "The nesting selector `&` represents the elements matched by the
    /// parent rule."
    Nesting,
}

/// Pseudo-classes per [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    /// [§ 14.1 :root](https://www.w3.org/TR/selectors-4/#the-root-pseudo)
    Root,
    /// [§ 14.4.1 :first-child](https://www.w3.org/TR/selectors-4/#the-first-child-pseudo)
    FirstChild,
    /// [§ 14.4.2 :last-child](https://www.w3.org/TR/selectors-4/#the-last-child-pseudo)
    LastChild,
    /// [§ 14.5.3 :first-of-type](https://www.w3.org/TR/selectors-4/#the-first-of-type-pseudo)
    FirstOfType,
    /// [§ 14.5.4 :last-of-type](https://www.w3.org/TR/selectors-4/#the-last-of-type-pseudo)
    LastOfType,
    /// [§ 14.4.3 :only-child](https://www.w3.org/TR/selectors-4/#the-only-child-pseudo)
    OnlyChild,
    /// [§ 14.2 :empty](https://www.w3.org/TR/selectors-4/#the-empty-pseudo)
    Empty,
    /// [§ 8.2 :link](https://www.w3.org/TR/selectors-4/#the-link-pseudo)
    Link,
    /// [§ 8.2 :visited](https://www.w3.org/TR/selectors-4/#the-visited-pseudo)
    Visited,
    /// [§ 9.1 :hover](https://www.w3.org/TR/selectors-4/#the-hover-pseudo)
    Hover,
    /// [§ 9.3 :focus](https://www.w3.org/TR/selectors-4/#the-focus-pseudo)
    Focus,
    /// [§ 9.2 :active](https://www.w3.org/TR/selectors-4/#the-active-pseudo)
    Active,
    /// [§ 13.1.1 :enabled](https://www.w3.org/TR/selectors-4/#enableddisabled)
    Enabled,
    /// [§ 13.1.1 :disabled](https://www.w3.org/TR/selectors-4/#enableddisabled)
    Disabled,
    /// [§ 14.4.4 :nth-child()](https://www.w3.org/TR/selectors-4/#the-nth-child-pseudo)
    NthChild(AnPlusB),
    /// [§ 14.5.1 :nth-of-type()](https://www.w3.org/TR/selectors-4/#the-nth-of-type-pseudo)
    NthOfType(AnPlusB),
    /// [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
    /// "The negation pseudo-class, :not(), is a functional pseudo-class
    /// taking a selector list as an argument."
    Not(Vec<ComplexSelector>),
    /// [§ 4.2 :is()](https://www.w3.org/TR/selectors-4/#matches)
    Is(Vec<ComplexSelector>),
    /// [§ 4.4 :where()](https://www.w3.org/TR/selectors-4/#zero-matches)
    /// "The specificity of a :where() pseudo-class is replaced by zero."
    Where(Vec<ComplexSelector>),
    /// Any other pseudo-class, stored by name without the leading `:`.
    Other(String),
}

/// [CSS Syntax § 6 The An+B microsyntax](https://www.w3.org/TR/css-syntax-3/#anb-microsyntax)
///
/// "The An+B notation defines an integer step (A) and offset (B), and
/// represents the An+Bth elements in a list, for every positive integer
/// or zero value of n."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnPlusB {
    /// The step, A.
    pub step: i32,
    /// The offset, B.
    pub offset: i32,
}

impl AnPlusB {
    /// Create a new `An+B` value.
    #[must_use]
    pub const fn new(step: i32, offset: i32) -> Self {
        Self { step, offset }
    }
}

/// Attribute selectors per [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelector {
    /// `[attr]`: "Represents an element with the att attribute"
    Exists(String),
    /// `[attr=value]`: "whose value is exactly 'val'"
    Equals(String, String),
    /// `[attr~=value]`: "a whitespace-separated list of words, one of which is exactly 'val'"
    Includes(String, String),
    /// `[attr|=value]`: "either being exactly 'val' or beginning with 'val' immediately followed by '-'"
    DashMatch(String, String),
    /// `[attr^=value]`: "whose value begins with the prefix 'val'"
    PrefixMatch(String, String),
    /// `[attr$=value]`: "whose value ends with the suffix 'val'"
    SuffixMatch(String, String),
    /// `[attr*=value]`: "contains at least one instance of the substring 'val'"
    SubstringMatch(String, String),
}

impl AttributeSelector {
    /// The attribute name this selector tests.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Exists(name)
            | Self::Equals(name, _)
            | Self::Includes(name, _)
            | Self::DashMatch(name, _)
            | Self::PrefixMatch(name, _)
            | Self::SuffixMatch(name, _)
            | Self::SubstringMatch(name, _) => name,
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    /// The list of simple selectors that make up this compound selector.
    pub simple_selectors: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Create a compound selector from its simple selectors.
    #[must_use]
    pub const fn new(simple_selectors: Vec<SimpleSelector>) -> Self {
        Self { simple_selectors }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1](https://www.w3.org/TR/selectors-4/#descendant-combinators) `A B`
    Descendant,
    /// [§ 16.2](https://www.w3.org/TR/selectors-4/#child-combinators) `A > B`
    Child,
    /// [§ 16.3](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators) `A + B`
    NextSibling,
    /// [§ 16.4](https://www.w3.org/TR/selectors-4/#general-sibling-combinators) `A ~ B`
    SubsequentSibling,
    /// [§ 17.1](https://www.w3.org/TR/selectors-4/#the-column-combinator) `A || B`
    Column,
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Example: `div.container > ul.nav li a.active` is stored as
/// ```text
/// subject: [a.active]
/// combinators: [(Descendant, li), (Descendant, ul.nav), (Child, div.container)]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    /// The rightmost compound selector (the subject of the selector).
    pub subject: CompoundSelector,

    /// Chain of (combinator, `compound_selector`) pairs going left from the subject.
    /// Empty if this is a single compound selector.
    ///
    /// For `A > B C`, this is `[(Descendant, B), (Child, A)]`.
    pub combinators: Vec<(Combinator, CompoundSelector)>,
}

impl ComplexSelector {
    /// A complex selector made of a single compound selector.
    #[must_use]
    pub const fn compound(subject: CompoundSelector) -> Self {
        Self {
            subject,
            combinators: Vec::new(),
        }
    }

    /// Build a complex selector from its compounds in source (left-to-right)
    /// order. `rest` pairs each compound with the combinator that precedes it.
    ///
    /// `from_source(a, [(Child, b), (Descendant, c)])` is `a > b c`.
    #[must_use]
    pub fn from_source(
        first: CompoundSelector,
        rest: impl IntoIterator<Item = (Combinator, CompoundSelector)>,
    ) -> Self {
        let mut subject = first;
        let mut combinators = Vec::new();
        for (combinator, compound) in rest {
            let left = std::mem::replace(&mut subject, compound);
            combinators.push((combinator, left));
        }
        combinators.reverse();
        Self {
            subject,
            combinators,
        }
    }

    /// Compounds paired with the combinator that follows them, in source order.
    /// The subject comes last, with no combinator.
    pub fn source_order(&self) -> impl Iterator<Item = (&CompoundSelector, Option<Combinator>)> {
        self.combinators
            .iter()
            .rev()
            .map(|(combinator, compound)| (compound, Some(*combinator)))
            .chain(std::iter::once((&self.subject, None)))
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Calculate specificity for the entire complex selector by summing
    /// specificity of all compound selectors in the chain.
    #[must_use]
    pub fn calculate_specificity(&self) -> Specificity {
        self.combinators
            .iter()
            .map(|(_, compound)| calculate_compound_specificity(compound))
            .fold(calculate_compound_specificity(&self.subject), Add::add)
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0, self.1 + other.1, self.2 + other.2)
    }
}

/// Calculate specificity for a single compound selector.
fn calculate_compound_specificity(compound: &CompoundSelector) -> Specificity {
    compound
        .simple_selectors
        .iter()
        .map(simple_specificity)
        .fold(Specificity::default(), Add::add)
}

fn simple_specificity(simple: &SimpleSelector) -> Specificity {
    match simple {
        // "count the number of ID selectors in the selector (= A)"
        SimpleSelector::Id(_) => Specificity(1, 0, 0),

        // "count the number of class selectors, attributes selectors,
        // and pseudo-classes in the selector (= B)"
        SimpleSelector::Class(_) | SimpleSelector::Attribute(_) => Specificity(0, 1, 0),
        SimpleSelector::PseudoClass(pc) => pseudo_class_specificity(pc),

        // "count the number of type selectors and pseudo-elements
        // in the selector (= C)"
        SimpleSelector::Type(_) | SimpleSelector::PseudoElement(_) => Specificity(0, 0, 1),

        // "ignore the universal selector"
        // The nesting selector is resolved against the parent rule during
        // cascade; on its own it contributes nothing.
        SimpleSelector::Universal | SimpleSelector::Nesting => Specificity::default(),
    }
}

/// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "The specificity of an :is(), :not(), or :has() pseudo-class is replaced
/// by the specificity of the most specific complex selector in its selector
/// list argument."
fn pseudo_class_specificity(pc: &PseudoClass) -> Specificity {
    match pc {
        PseudoClass::Is(list) | PseudoClass::Not(list) => list
            .iter()
            .map(ComplexSelector::calculate_specificity)
            .max()
            .unwrap_or_default(),
        PseudoClass::Where(_) => Specificity::default(),
        _ => Specificity(0, 1, 0),
    }
}

/// A selector as stored in a style rule: the complex selector plus its
/// specificity, when the engine has computed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// The complex selector (compound selectors with combinators).
    pub complex: ComplexSelector,
    /// The specificity of this selector, if computed.
    pub specificity: Option<Specificity>,
}

impl Selector {
    /// Wrap a complex selector without a specificity.
    #[must_use]
    pub const fn new(complex: ComplexSelector) -> Self {
        Self {
            complex,
            specificity: None,
        }
    }

    /// Fill in the specificity from the selector's structure.
    #[must_use]
    pub fn with_specificity(mut self) -> Self {
        self.specificity = Some(self.complex.calculate_specificity());
        self
    }

    /// Check if this is a single compound selector (no combinators).
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.complex.combinators.is_empty()
    }
}

impl From<ComplexSelector> for Selector {
    fn from(complex: ComplexSelector) -> Self {
        Self::new(complex)
    }
}
