//! Indented line emitter shared by every renderer.

use std::ops::{Deref, DerefMut};

use owo_colors::{OwoColorize, Style};

use crate::options::DEFAULT_MAX_DEPTH;

/// Two spaces per nesting level.
const INDENT_UNIT: &str = "  ";

/// Appends indented lines to a caller-owned `String`.
///
/// Indentation is scoped: [`TreeWriter::indent`] returns a guard that
/// restores the previous level when dropped, including on early return
/// and during unwinding.
#[derive(Debug)]
pub struct TreeWriter<'a> {
    out: &'a mut String,
    depth: usize,
    max_depth: usize,
    colorize: bool,
}

impl<'a> TreeWriter<'a> {
    /// A writer at depth 0 with colors off and the default depth limit.
    pub const fn new(out: &'a mut String) -> Self {
        Self {
            out,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            colorize: false,
        }
    }

    /// Wrap painted text in ANSI color codes.
    #[must_use]
    pub const fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Deepest indent level [`TreeWriter::indent`] may open.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Start writing at `levels` instead of 0.
    ///
    /// # Panics
    ///
    /// Panics if `levels` exceeds the depth limit.
    #[must_use]
    pub fn with_base_indent(mut self, levels: usize) -> Self {
        check_depth(levels, self.max_depth);
        self.depth = levels;
        self
    }

    /// Current indent level.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Whether [`TreeWriter::paint`] emits color codes.
    #[must_use]
    pub const fn colorize(&self) -> bool {
        self.colorize
    }

    /// Write `text` on its own line at the current indent level. An empty
    /// line is written without indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT_UNIT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Open a nested level. The level closes when the guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the new level exceeds the depth limit. A tree that deep is
    /// corrupt or cyclic.
    pub fn indent(&mut self) -> IndentGuard<'_, 'a> {
        check_depth(self.depth + 1, self.max_depth);
        self.depth += 1;
        IndentGuard { writer: self }
    }

    /// `text` in `style` when colors are on, unchanged otherwise.
    #[must_use]
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.colorize {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

fn check_depth(depth: usize, max_depth: usize) {
    assert!(
        depth <= max_depth,
        "dump nesting reached level {depth}, beyond max_depth {max_depth}; the tree is corrupt or cyclic"
    );
}

/// Scope of one extra indent level. Derefs to the writer.
#[derive(Debug)]
pub struct IndentGuard<'w, 'a> {
    writer: &'w mut TreeWriter<'a>,
}

impl<'a> Deref for IndentGuard<'_, 'a> {
    type Target = TreeWriter<'a>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for IndentGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for IndentGuard<'_, '_> {
    fn drop(&mut self) {
        self.writer.depth -= 1;
    }
}
