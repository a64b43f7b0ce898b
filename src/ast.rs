//! Block-level token tree produced by [`tokenize`](crate::tokenize).
//!
//! Parents own their children; there are no back-pointers. Text fields hold the
//! raw, not-yet-inline-processed content of a block.

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Token {
    /// Consecutive non-blank lines, left-trimmed and joined with `\n`.
    Paragraph { text: String },
    /// `level` is always in `1..=6`.
    Heading { level: u8, text: String },
    /// Verbatim content; every captured line is newline-terminated.
    CodeBlock { language: String, raw_content: String },
    List { ordered: bool, items: Vec<ListItem> },
    Blockquote { children: Vec<Token> },
    Table {
        header_cells: Vec<String>,
        alignments: Vec<TableAlignment>,
        rows: Vec<Vec<String>>,
    },
    HorizontalRule,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ListItem {
    pub text: String,
    /// Only ever holds nested [`Token::List`]s.
    pub children: Vec<Token>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TableAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TableAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            TableAlignment::Left => "left",
            TableAlignment::Center => "center",
            TableAlignment::Right => "right",
        }
    }
}
