mod links;

pub use links::normalize_url;

use crate::ParseOptions;
use crate::html::escape_html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex, Replacer};
use std::borrow::Cow;

// Placeholders are `OPEN <index> CLOSE`. Both delimiters are private-use code
// points; occurrences in the source text are replaced before any pass runs.
const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("\u{E000}(\\d+)\u{E001}").unwrap());
static ESCAPED_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\(.)").unwrap());
static STRIKETHROUGH: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Fragments hidden from the syntax passes: backslash-escaped characters and
/// the markup emitted by the link-like passes.
#[derive(Default)]
pub(crate) struct Stash {
    entries: Vec<String>,
}

impl Stash {
    /// Store `fragment` and return the placeholder that stands in for it.
    /// Placeholders already inside `fragment` are resolved first, so a single
    /// restore pass is enough at the end.
    pub(super) fn protect(&mut self, fragment: &str) -> String {
        let resolved = self.restore(fragment);
        let index = self.entries.len();
        self.entries.push(resolved.into_owned());
        format!("{OPEN}{index}{CLOSE}")
    }

    pub(super) fn restore<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.contains(OPEN) {
            return Cow::Borrowed(text);
        }
        PLACEHOLDER.replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| self.entries.get(i))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
    }
}

type Pass = fn(String, &mut Stash) -> String;

/// Span passes in application order. Each pass rescans the whole buffer.
/// Bold must precede italic so `**` is never split into two `*`.
const PASSES: [Pass; 9] = [
    protect_escapes,
    links::autolinks,
    links::images,
    links::links,
    strikethrough,
    underline,
    bold,
    italic,
    code_spans,
];

static NEEDS_PROCESSING: [bool; 256] = {
    let mut t = [false; 256];
    t[b'\\' as usize] = true;
    t[b'[' as usize] = true;
    t[b'*' as usize] = true;
    t[b'_' as usize] = true;
    t[b'~' as usize] = true;
    t[b'`' as usize] = true;
    t
};

#[inline]
fn is_plain_text(s: &str) -> bool {
    !s.bytes().any(|b| NEEDS_PROCESSING[b as usize]) && !s.contains("://") && !s.contains("www.")
}

/// Transform the text of a single block into an HTML fragment with default
/// options.
///
/// # Examples
///
/// ```
/// use marky::render_inline;
///
/// assert_eq!(render_inline("a **b** <c>"), "a <strong>b</strong> &lt;c&gt;");
/// assert_eq!(render_inline(r"\*not em\*"), "*not em*");
/// ```
pub fn render_inline(text: &str) -> String {
    render_inline_with(text, &ParseOptions::default())
}

/// Transform the text of a single block into an HTML fragment.
pub fn render_inline_with(text: &str, opts: &ParseOptions) -> String {
    let escaped = escape_html(text);
    let mut html = if is_plain_text(&escaped) {
        escaped
    } else {
        let mut buf = if escaped.contains([OPEN, CLOSE]) {
            escaped.replace([OPEN, CLOSE], "\u{FFFD}")
        } else {
            escaped
        };
        let mut stash = Stash::default();
        for pass in PASSES {
            buf = pass(buf, &mut stash);
        }
        stash.restore(&buf).into_owned()
    };
    if opts.hard_breaks && html.contains('\n') {
        html = html.replace('\n', "<br>");
    }
    html
}

/// Run `re` over `buf`, reusing the buffer when nothing matched.
pub(super) fn rewrite<R: Replacer>(buf: String, re: &Regex, rep: R) -> String {
    let replaced = match re.replace_all(&buf, rep) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    replaced.unwrap_or(buf)
}

fn protect_escapes(buf: String, stash: &mut Stash) -> String {
    rewrite(buf, &ESCAPED_CHAR, |caps: &Captures| stash.protect(&caps[1]))
}

fn strikethrough(buf: String, _: &mut Stash) -> String {
    rewrite(buf, &STRIKETHROUGH, "<del>$1</del>")
}

fn underline(buf: String, _: &mut Stash) -> String {
    rewrite(buf, &UNDERLINE, "<u>$1</u>")
}

fn bold(buf: String, _: &mut Stash) -> String {
    rewrite(buf, &BOLD, "<strong>$1</strong>")
}

fn italic(buf: String, _: &mut Stash) -> String {
    rewrite(buf, &ITALIC, "<em>$1</em>")
}

fn code_spans(buf: String, _: &mut Stash) -> String {
    rewrite(buf, &CODE_SPAN, "<code>$1</code>")
}
