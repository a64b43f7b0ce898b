//! # marky
//!
//! The document pipeline behind the Marky editor: a line-oriented block
//! tokenizer, an ordered inline transformer and an HTML renderer, plus a
//! title extractor that names the document after its leading heading.
//!
//! ## Usage
//!
//! ```
//! use marky::{derive_title, render, tokenize};
//!
//! let tokens = tokenize("# Notes\n\nSome **bold** text");
//! assert_eq!(render(&tokens), "<h1>Notes</h1><p>Some <strong>bold</strong> text</p>");
//! assert_eq!(derive_title(&tokens), "Notes");
//! ```
//!
//! ## Syntax
//!
//! | Syntax | HTML |
//! |---|---|
//! | `# ` .. `###### ` | `<h1>` .. `<h6>` |
//! | ```` ```lang ```` fences | `<pre><code class="lang">` |
//! | `- `, `+ `, `1. ` | `<ul>` / `<ol>`, nested by 4 columns |
//! | `> ` | `<blockquote>` |
//! | `a \| b` + `-\|-` | `<table>` |
//! | `---`, `***`, `___` | `<hr>` |
//! | `**x**`, `*x*`, `__x__`, `~~x~~`, `` `x` `` | `<strong>`, `<em>`, `<u>`, `<del>`, `<code>` |
//! | `[text](url)`, `![alt](src)`, bare URLs | `<a>`, `<img />` |
//! | `\*` | literal `*` |
//!
//! Every entry point is total: any input yields a token tree and markup.

pub mod ast;
mod block;
mod html;
mod inline;
mod render;
mod title;

pub use ast::{ListItem, TableAlignment, Token};
pub use block::{tokenize, tokenize_with};
pub use inline::{normalize_url, render_inline, render_inline_with};
pub use render::{render, render_with};
pub use title::{DEFAULT_TITLE, derive_title, derive_title_with};

/// Options shared by every stage of the pipeline.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// When `true`, every newline inside a block's text becomes `<br>`.
    /// When `false` the newline is kept and the lines read as joined prose.
    /// Default: `true`.
    pub hard_breaks: bool,
    /// How deep lists and blockquotes may nest before the tokenizer stops
    /// descending. Deeper list lines become siblings of the innermost list and
    /// deeper quote lines stay paragraph text. Default: `64`.
    pub max_nesting_depth: usize,
    /// Title used when the document does not open with a non-empty level-1
    /// heading. Default: [`DEFAULT_TITLE`].
    pub fallback_title: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            max_nesting_depth: 64,
            fallback_title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Tokenize and render in one call.
///
/// # Examples
///
/// ```
/// use marky::{to_html, ParseOptions};
///
/// let html = to_html("> quoted", &ParseOptions::default());
/// assert_eq!(html, "<blockquote><p>quoted</p></blockquote>");
/// ```
pub fn to_html(markdown: &str, options: &ParseOptions) -> String {
    let tokens = tokenize_with(markdown, options);
    render_with(&tokens, options)
}
