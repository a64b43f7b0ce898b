use crate::ParseOptions;
use crate::ast::{ListItem, TableAlignment, Token};
use crate::html::{escape_attr_into, escape_html_into};
use crate::inline::render_inline_with;

// Nested blocks are walked with an explicit stack, so the depth of the token
// tree never translates into call depth.
enum Work<'a> {
    Token(&'a Token),
    Item(&'a ListItem),
    CloseTag(&'static str),
}

/// Render a token tree to HTML with default options.
///
/// # Examples
///
/// ```
/// use marky::{render, tokenize};
///
/// let html = render(&tokenize("- a\n    - b\n- c"));
/// assert_eq!(html, "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>");
/// ```
pub fn render(tokens: &[Token]) -> String {
    render_with(tokens, &ParseOptions::default())
}

/// Render a token tree to HTML. Elements are emitted back to back with no
/// separating whitespace.
pub fn render_with(tokens: &[Token], opts: &ParseOptions) -> String {
    let mut out = String::new();
    let mut stack: Vec<Work<'_>> = tokens.iter().rev().map(Work::Token).collect();

    while let Some(work) = stack.pop() {
        match work {
            Work::CloseTag(tag) => out.push_str(tag),
            Work::Item(item) => {
                out.push_str("<li>");
                out.push_str(&render_inline_with(&item.text, opts));
                stack.push(Work::CloseTag("</li>"));
                for child in item.children.iter().rev() {
                    stack.push(Work::Token(child));
                }
            }
            Work::Token(token) => render_one(token, &mut out, opts, &mut stack),
        }
    }
    out
}

fn render_one<'a>(
    token: &'a Token,
    out: &mut String,
    opts: &ParseOptions,
    stack: &mut Vec<Work<'a>>,
) {
    match token {
        Token::Paragraph { text } => {
            out.push_str("<p>");
            out.push_str(&render_inline_with(text, opts));
            out.push_str("</p>");
        }
        Token::Heading { level, text } => {
            let digit = (b'0' + (*level).clamp(1, 6)) as char;
            out.push_str("<h");
            out.push(digit);
            out.push('>');
            out.push_str(&render_inline_with(text, opts));
            out.push_str("</h");
            out.push(digit);
            out.push('>');
        }
        Token::CodeBlock {
            language,
            raw_content,
        } => {
            out.push_str("<pre><code class=\"");
            escape_attr_into(out, language);
            out.push_str("\">");
            let content = raw_content.strip_suffix('\n').unwrap_or(raw_content);
            escape_html_into(out, content);
            out.push_str("</code></pre>");
        }
        Token::List { ordered, items } => {
            let (open, close) = if *ordered {
                ("<ol>", "</ol>")
            } else {
                ("<ul>", "</ul>")
            };
            out.push_str(open);
            stack.push(Work::CloseTag(close));
            for item in items.iter().rev() {
                stack.push(Work::Item(item));
            }
        }
        Token::Blockquote { children } => {
            out.push_str("<blockquote>");
            stack.push(Work::CloseTag("</blockquote>"));
            for child in children.iter().rev() {
                stack.push(Work::Token(child));
            }
        }
        Token::Table {
            header_cells,
            alignments,
            rows,
        } => {
            out.push_str("<table><thead><tr>");
            for (i, cell) in header_cells.iter().enumerate() {
                render_table_cell(out, cell, "th", alignments.get(i).copied(), opts);
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for (i, cell) in row.iter().enumerate() {
                    render_table_cell(out, cell, "td", alignments.get(i).copied(), opts);
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }
        Token::HorizontalRule => out.push_str("<hr>"),
    }
}

/// Cells past the end of the alignment row render left-aligned.
fn render_table_cell(
    out: &mut String,
    content: &str,
    tag: &str,
    align: Option<TableAlignment>,
    opts: &ParseOptions,
) {
    out.push('<');
    out.push_str(tag);
    out.push_str(" style=\"text-align:");
    out.push_str(align.unwrap_or_default().as_str());
    out.push_str("\">");
    out.push_str(&render_inline_with(content, opts));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
