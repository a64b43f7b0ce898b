use crate::ParseOptions;
use crate::ast::Token;
use crate::html::to_plain_text;
use crate::inline::render_inline_with;

/// Title used when the document does not lead with a level-1 heading.
pub const DEFAULT_TITLE: &str = "Marky";

/// Derive a document title with default options.
///
/// # Examples
///
/// ```
/// use marky::{derive_title, tokenize, DEFAULT_TITLE};
///
/// assert_eq!(derive_title(&tokenize("# **My** notes\nbody")), "My notes");
/// assert_eq!(derive_title(&tokenize("## Not a title")), DEFAULT_TITLE);
/// ```
pub fn derive_title(tokens: &[Token]) -> String {
    derive_title_with(tokens, &ParseOptions::default())
}

/// The plain text of the first top-level token when it is a level-1 heading,
/// otherwise (or when that text is blank) `opts.fallback_title`.
pub fn derive_title_with(tokens: &[Token], opts: &ParseOptions) -> String {
    let heading_text = match tokens.first() {
        Some(Token::Heading { level: 1, text }) => {
            to_plain_text(&render_inline_with(text, opts))
        }
        _ => return opts.fallback_title.clone(),
    };
    let title = heading_text.trim();
    if title.is_empty() {
        opts.fallback_title.clone()
    } else {
        title.to_string()
    }
}
