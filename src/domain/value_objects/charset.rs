//! Charset Value Object
//!
//! The glyph set used to draw tree connectors.

use serde::{Deserialize, Serialize};

/// Glyphs for one connector style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Connector for a child that has later siblings
    pub branch: &'static str,
    /// Connector for the last child (and the root)
    pub last: &'static str,
    /// Prefix extension beneath a non-last node
    pub vertical: &'static str,
    /// Prefix extension beneath a last node
    pub blank: &'static str,
}

/// Connector style for rendered trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Box-drawing characters (default)
    #[default]
    Unicode,
    /// Plain 7-bit ASCII
    Ascii,
}

impl Charset {
    pub fn glyphs(self) -> Glyphs {
        match self {
            Charset::Unicode => Glyphs {
                branch: "├── ",
                last: "└── ",
                vertical: "│   ",
                blank: "    ",
            },
            Charset::Ascii => Glyphs {
                branch: "|-- ",
                last: "`-- ",
                vertical: "|   ",
                blank: "    ",
            },
        }
    }
}
