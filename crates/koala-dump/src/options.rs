//! Rendering options.
//!
//! Every renderer takes its own options struct. All of them implement
//! `Default` and have `with_*` builders.

/// Deepest nesting any renderer will follow before treating the tree as
/// corrupt.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Options for [`crate::dump_dom_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomDumpOptions {
    /// Print element attributes as `<tag a="v">`.
    pub show_attributes: bool,
    /// Nesting limit; deeper trees panic.
    pub max_depth: usize,
}

impl Default for DomDumpOptions {
    fn default() -> Self {
        Self {
            show_attributes: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DomDumpOptions {
    /// Set [`DomDumpOptions::show_attributes`].
    #[must_use]
    pub const fn with_attributes(mut self, show_attributes: bool) -> Self {
        self.show_attributes = show_attributes;
        self
    }

    /// Set [`DomDumpOptions::max_depth`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Options for [`crate::dump_layout_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDumpOptions {
    /// Add a `box-model:` line under every box.
    pub show_box_model: bool,
    /// Add one `(name: value)` line per cascaded property.
    pub show_cascaded_properties: bool,
    /// Color class names and flags.
    pub colorize: bool,
    /// Nesting limit; deeper trees panic.
    pub max_depth: usize,
}

impl Default for LayoutDumpOptions {
    fn default() -> Self {
        Self {
            show_box_model: false,
            show_cascaded_properties: false,
            colorize: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LayoutDumpOptions {
    /// Set [`LayoutDumpOptions::show_box_model`].
    #[must_use]
    pub const fn with_box_model(mut self, show: bool) -> Self {
        self.show_box_model = show;
        self
    }

    /// Set [`LayoutDumpOptions::show_cascaded_properties`].
    #[must_use]
    pub const fn with_cascaded_properties(mut self, show: bool) -> Self {
        self.show_cascaded_properties = show;
        self
    }

    /// Set [`LayoutDumpOptions::colorize`].
    #[must_use]
    pub const fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Set [`LayoutDumpOptions::max_depth`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Options for [`crate::dump_paint_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintDumpOptions {
    /// Color each header by paintable kind.
    pub colorize: bool,
    /// Indent level of the root line.
    pub indent: usize,
    /// Nesting limit; deeper trees panic.
    pub max_depth: usize,
}

impl Default for PaintDumpOptions {
    fn default() -> Self {
        Self {
            colorize: false,
            indent: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PaintDumpOptions {
    /// Set [`PaintDumpOptions::colorize`].
    #[must_use]
    pub const fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Set [`PaintDumpOptions::indent`].
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set [`PaintDumpOptions::max_depth`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// How a disabled style sheet is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InertRules {
    /// Render every rule and mark the sheet header with `[disabled]`.
    #[default]
    Flagged,
    /// Render a disabled sheet exactly like an enabled one.
    Identical,
}

/// Options for [`crate::dump_rule`] and [`crate::dump_sheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssDumpOptions {
    /// Color at-rule keywords and the sheet header.
    pub colorize: bool,
    /// Indent level of the outermost lines.
    pub indent_levels: usize,
    /// Treatment of disabled sheets.
    pub inert_rules: InertRules,
    /// Nesting limit; deeper rule trees panic.
    pub max_depth: usize,
}

impl Default for CssDumpOptions {
    fn default() -> Self {
        Self {
            colorize: false,
            indent_levels: 0,
            inert_rules: InertRules::Flagged,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CssDumpOptions {
    /// Set [`CssDumpOptions::colorize`].
    #[must_use]
    pub const fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Set [`CssDumpOptions::indent_levels`].
    #[must_use]
    pub const fn with_indent_levels(mut self, indent_levels: usize) -> Self {
        self.indent_levels = indent_levels;
        self
    }

    /// Set [`CssDumpOptions::inert_rules`].
    #[must_use]
    pub const fn with_inert_rules(mut self, inert_rules: InertRules) -> Self {
        self.inert_rules = inert_rules;
        self
    }

    /// Set [`CssDumpOptions::max_depth`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
