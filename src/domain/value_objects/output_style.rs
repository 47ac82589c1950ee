//! Output style value object - how compiled CSS is laid out

use serde::{Deserialize, Serialize};

/// CSS output style requested by the caller
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// One declaration per line, blocks separated by blank lines
    #[default]
    Expanded,
    /// Indentation follows selector nesting
    Nested,
    /// One rule per line
    Compact,
    /// Minified, no whitespace
    Compressed,
}

impl OutputStyle {
    /// All accepted styles, in CLI help order
    pub const ALL: [OutputStyle; 4] = [
        OutputStyle::Expanded,
        OutputStyle::Nested,
        OutputStyle::Compact,
        OutputStyle::Compressed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Expanded => "expanded",
            OutputStyle::Nested => "nested",
            OutputStyle::Compact => "compact",
            OutputStyle::Compressed => "compressed",
        }
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == needle)
            .ok_or_else(|| {
                format!(
                    "unknown output style '{}' (expected one of: expanded, nested, compact, compressed)",
                    s
                )
            })
    }
}
