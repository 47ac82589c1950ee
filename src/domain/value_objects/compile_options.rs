//! Compile options value object

use std::path::PathBuf;

use super::OutputStyle;

/// Default numeric precision (fractional digits)
pub const DEFAULT_PRECISION: u32 = 8;

/// Options forwarded to the style-sheet compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub style: OutputStyle,
    pub precision: u32,
    /// Extra directories searched by `@import` / `@use`
    pub include_roots: Vec<PathBuf>,
    /// Only honoured for single-file compiles
    pub source_map: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            precision: DEFAULT_PRECISION,
            include_roots: Vec::new(),
            source_map: false,
        }
    }
}

impl CompileOptions {
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_include_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.include_roots = roots;
        self
    }

    pub fn with_source_map(mut self, source_map: bool) -> Self {
        self.source_map = source_map;
        self
    }
}
