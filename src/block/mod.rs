mod leaf_blocks;
mod parser;

use leaf_blocks::*;

use crate::ParseOptions;
use crate::ast::Token;

/// Split a document into block tokens with default options.
///
/// # Examples
///
/// ```
/// use marky::{tokenize, Token};
///
/// let tokens = tokenize("# Title\ntext");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Heading { level: 1, text: "Title".into() },
///         Token::Paragraph { text: "text".into() },
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with(text, &ParseOptions::default())
}

/// Split a document into block tokens. Never fails: malformed constructs
/// degrade into whatever tokens their lines still form.
pub fn tokenize_with(text: &str, options: &ParseOptions) -> Vec<Token> {
    let lines: Vec<&str> = text.split('\n').collect();
    Tokenizer::new(lines, 0, options.max_nesting_depth).run()
}

#[derive(Debug)]
struct OpenCodeBlock {
    closing_fence: &'static str,
    language: String,
    content: String,
}

impl OpenCodeBlock {
    fn into_token(self) -> Token {
        Token::CodeBlock {
            language: self.language,
            raw_content: self.content,
        }
    }
}

pub(crate) struct Tokenizer<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    tokens: Vec<Token>,
    paragraph: Vec<&'a str>,
    code: Option<OpenCodeBlock>,
    /// Containers (blockquotes and list levels) enclosing these lines.
    depth: usize,
    max_depth: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(lines: Vec<&'a str>, depth: usize, max_depth: usize) -> Self {
        Self {
            lines,
            pos: 0,
            tokens: Vec::new(),
            paragraph: Vec::new(),
            code: None,
            depth,
            max_depth,
        }
    }

    pub(crate) fn run(mut self) -> Vec<Token> {
        while self.pos < self.lines.len() {
            self.process_line();
        }
        // an unterminated fence runs to the end of the input
        if let Some(code) = self.code.take() {
            self.tokens.push(code.into_token());
        }
        self.flush_paragraph();
        self.tokens
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            self.tokens.push(Token::Paragraph {
                text: self.paragraph.join("\n"),
            });
            self.paragraph.clear();
        }
    }

    /// Emit a block token, closing any paragraph in progress first.
    fn push_block(&mut self, token: Token) {
        self.flush_paragraph();
        self.tokens.push(token);
    }
}
