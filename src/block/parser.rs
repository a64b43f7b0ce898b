use super::*;
use crate::ast::ListItem;

impl<'a> Tokenizer<'a> {
    /// Consume one or more lines starting at `self.pos`.
    ///
    /// Checks run in a fixed order: open code block, fence, table, blockquote,
    /// list, thematic break, heading, blank line, paragraph text. A pipe line
    /// followed by a separator row is therefore a table even when it also
    /// looks like a list item.
    pub(super) fn process_line(&mut self) {
        let raw = self.lines[self.pos];
        let line = raw.trim_start();

        if let Some(code) = &mut self.code {
            if line.starts_with(code.closing_fence) {
                if let Some(code) = self.code.take() {
                    self.tokens.push(code.into_token());
                }
            } else {
                code.content.push_str(line);
                code.content.push('\n');
            }
            self.pos += 1;
            return;
        }

        if let Some(language) = parse_fence_start(line) {
            self.flush_paragraph();
            self.code = Some(OpenCodeBlock {
                closing_fence: FENCE,
                language: language.to_string(),
                content: String::new(),
            });
            self.pos += 1;
            return;
        }

        if self.at_table_start(line) {
            let table = self.parse_table();
            self.push_block(table);
            return;
        }

        if line.starts_with('>') && self.depth < self.max_depth {
            let quote = self.parse_blockquote();
            self.push_block(quote);
            return;
        }

        if parse_list_marker(line).is_some() {
            if let Some(list) = self.parse_list(indent_width(raw), self.depth + 1) {
                self.push_block(list);
            }
            return;
        }

        if is_thematic_break(line) {
            self.push_block(Token::HorizontalRule);
        } else if let Some((level, text)) = parse_atx_heading(line) {
            self.push_block(Token::Heading {
                level,
                text: text.to_string(),
            });
        } else if line.is_empty() {
            self.flush_paragraph();
        } else {
            self.paragraph.push(line);
        }
        self.pos += 1;
    }

    fn at_table_start(&self, line: &str) -> bool {
        line.contains('|')
            && self
                .lines
                .get(self.pos + 1)
                .is_some_and(|next| is_table_separator(next))
    }

    /// Header line, separator line, then every following line containing a
    /// pipe.
    fn parse_table(&mut self) -> Token {
        let header_cells = split_table_row(self.lines[self.pos]);
        let alignments = parse_table_alignments(self.lines[self.pos + 1]);
        self.pos += 2;

        let mut rows = Vec::new();
        while let Some(&line) = self.lines.get(self.pos)
            && line.contains('|')
        {
            rows.push(split_table_row(line));
            self.pos += 1;
        }

        Token::Table {
            header_cells,
            alignments,
            rows,
        }
    }

    /// Collect the contiguous `>` lines, strip one marker run from each and
    /// tokenize the result as a nested document.
    fn parse_blockquote(&mut self) -> Token {
        let mut quoted = Vec::new();
        while let Some(&line) = self.lines.get(self.pos)
            && line.trim_start().starts_with('>')
        {
            quoted.push(strip_quote_marker(line));
            self.pos += 1;
        }

        Token::Blockquote {
            children: Tokenizer::new(quoted, self.depth + 1, self.max_depth).run(),
        }
    }

    /// Consume list items indented at least `start_indent` columns. A line
    /// indented 4 or more columns past its item opens a child list at
    /// `level + 1`, unless that would exceed the nesting limit, in which case
    /// the deeper items stay in this list.
    ///
    /// Returns `None` when no item was consumed. `ordered` follows the first
    /// item's marker.
    fn parse_list(&mut self, start_indent: usize, level: usize) -> Option<Token> {
        let mut items = Vec::new();
        let mut ordered = None;

        while let Some(&raw) = self.lines.get(self.pos) {
            let indent = indent_width(raw);
            if indent < start_indent {
                break;
            }
            let Some(marker) = parse_list_marker(raw.trim_start()) else {
                break;
            };
            ordered.get_or_insert(marker.ordered);
            self.pos += 1;

            let mut children = Vec::new();
            if level < self.max_depth
                && let Some(&next) = self.lines.get(self.pos)
            {
                let child_indent = indent_width(next);
                if child_indent >= indent + 4
                    && let Some(child) = self.parse_list(child_indent, level + 1)
                {
                    children.push(child);
                }
            }

            items.push(ListItem {
                text: marker.content.to_string(),
                children,
            });
        }

        Some(Token::List {
            ordered: ordered?,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{ListItem, TableAlignment, Token};
    use crate::{ParseOptions, tokenize, tokenize_with};

    fn para(text: &str) -> Token {
        Token::Paragraph { text: text.into() }
    }

    fn item(text: &str, children: Vec<Token>) -> ListItem {
        ListItem {
            text: text.into(),
            children,
        }
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n  \n\t\n").is_empty());
    }

    #[test]
    fn paragraph_lines_are_left_trimmed_and_joined() {
        assert_eq!(tokenize("  one\n\ttwo  \n\nthree"), vec![para("one\ntwo  "), para("three")]);
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            tokenize("# Title\ntext"),
            vec![
                Token::Heading {
                    level: 1,
                    text: "Title".into()
                },
                para("text"),
            ]
        );
    }

    #[test]
    fn heading_interrupts_paragraph() {
        assert_eq!(
            tokenize("a\n### b\nc"),
            vec![
                para("a"),
                Token::Heading {
                    level: 3,
                    text: "b".into()
                },
                para("c"),
            ]
        );
    }

    #[test]
    fn code_block_keeps_lines_left_trimmed() {
        assert_eq!(
            tokenize("intro\n```rust\n  let x = 1;\n\n```\nafter"),
            vec![
                para("intro"),
                Token::CodeBlock {
                    language: "rust".into(),
                    raw_content: "let x = 1;\n\n".into()
                },
                para("after"),
            ]
        );
    }

    #[test]
    fn any_fence_prefixed_line_closes_code_block() {
        assert_eq!(
            tokenize("```\nx\n```js\ny"),
            vec![
                Token::CodeBlock {
                    language: "".into(),
                    raw_content: "x\n".into()
                },
                para("y"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(
            tokenize("```txt\n# not a heading\n- nor a list"),
            vec![Token::CodeBlock {
                language: "txt".into(),
                raw_content: "# not a heading\n- nor a list\n".into()
            }]
        );
    }

    #[test]
    fn nested_list_by_four_columns() {
        assert_eq!(
            tokenize("- a\n    - b\n- c"),
            vec![Token::List {
                ordered: false,
                items: vec![
                    item(
                        "a",
                        vec![Token::List {
                            ordered: false,
                            items: vec![item("b", vec![])]
                        }]
                    ),
                    item("c", vec![]),
                ]
            }]
        );
    }

    #[test]
    fn tab_indent_nests() {
        assert_eq!(
            tokenize("1. a\n\t+ b"),
            vec![Token::List {
                ordered: true,
                items: vec![item(
                    "a",
                    vec![Token::List {
                        ordered: false,
                        items: vec![item("b", vec![])]
                    }]
                )]
            }]
        );
    }

    #[test]
    fn shallow_indent_stays_sibling() {
        assert_eq!(
            tokenize("- a\n  - b"),
            vec![Token::List {
                ordered: false,
                items: vec![item("a", vec![]), item("b", vec![])]
            }]
        );
    }

    #[test]
    fn ordered_flag_follows_first_item() {
        assert_eq!(
            tokenize("1. a\n- b"),
            vec![Token::List {
                ordered: true,
                items: vec![item("a", vec![]), item("b", vec![])]
            }]
        );
        assert_eq!(
            tokenize("- a\n2. b"),
            vec![Token::List {
                ordered: false,
                items: vec![item("a", vec![]), item("b", vec![])]
            }]
        );
    }

    #[test]
    fn child_list_flag_is_independent() {
        let tokens = tokenize("- a\n    1. b\n- c");
        let Token::List { ordered, items } = &tokens[0] else {
            panic!("expected list, got {tokens:?}");
        };
        assert!(!ordered);
        assert_eq!(
            items[0].children,
            vec![Token::List {
                ordered: true,
                items: vec![item("b", vec![])]
            }]
        );
    }

    #[test]
    fn deeper_non_marker_line_ends_list_without_child() {
        assert_eq!(
            tokenize("- a\n      text"),
            vec![
                Token::List {
                    ordered: false,
                    items: vec![item("a", vec![])]
                },
                para("text"),
            ]
        );
    }

    #[test]
    fn list_ends_at_plain_line() {
        assert_eq!(
            tokenize("- a\nb"),
            vec![
                Token::List {
                    ordered: false,
                    items: vec![item("a", vec![])]
                },
                para("b"),
            ]
        );
    }

    #[test]
    fn list_interrupts_paragraph() {
        assert_eq!(
            tokenize("text\n- a"),
            vec![
                para("text"),
                Token::List {
                    ordered: false,
                    items: vec![item("a", vec![])]
                },
            ]
        );
    }

    #[test]
    fn dash_spaced_rule_is_a_list_item() {
        assert_eq!(
            tokenize("- - -"),
            vec![Token::List {
                ordered: false,
                items: vec![item("- -", vec![])]
            }]
        );
        assert_eq!(tokenize("* * *"), vec![Token::HorizontalRule]);
    }

    #[test]
    fn blockquote_is_tokenized_recursively() {
        assert_eq!(
            tokenize("> # Quote\n> - a\n>b\nafter"),
            vec![
                Token::Blockquote {
                    children: vec![
                        Token::Heading {
                            level: 1,
                            text: "Quote".into()
                        },
                        Token::List {
                            ordered: false,
                            items: vec![item("a", vec![])]
                        },
                        para("b"),
                    ]
                },
                para("after"),
            ]
        );
    }

    #[test]
    fn nested_blockquotes() {
        assert_eq!(
            tokenize("> > deep\n> shallow"),
            vec![Token::Blockquote {
                children: vec![
                    Token::Blockquote {
                        children: vec![para("deep")]
                    },
                    para("shallow"),
                ]
            }]
        );
    }

    #[test]
    fn table_with_rows() {
        assert_eq!(
            tokenize("A|B\n-|:-:\n1|2\n| 3 | 4 |\nend"),
            vec![
                Token::Table {
                    header_cells: vec!["A".into(), "B".into()],
                    alignments: vec![TableAlignment::Left, TableAlignment::Center],
                    rows: vec![
                        vec!["1".into(), "2".into()],
                        vec!["3".into(), "4".into()],
                    ],
                },
                para("end"),
            ]
        );
    }

    #[test]
    fn table_wins_over_list_marker() {
        let tokens = tokenize("- a | b\n--|--");
        assert_eq!(
            tokens,
            vec![Token::Table {
                header_cells: vec!["- a".into(), "b".into()],
                alignments: vec![TableAlignment::Left, TableAlignment::Left],
                rows: vec![],
            }]
        );
    }

    #[test]
    fn pipe_without_separator_is_paragraph() {
        assert_eq!(tokenize("A | B\nx | y"), vec![para("A | B\nx | y")]);
    }

    #[test]
    fn lone_dashes_are_a_rule() {
        assert_eq!(tokenize("---"), vec![Token::HorizontalRule]);
        assert_eq!(
            tokenize("text\n___\nmore"),
            vec![para("text"), Token::HorizontalRule, para("more")]
        );
    }

    #[test]
    fn nesting_limit_flattens_lists() {
        let opts = ParseOptions {
            max_nesting_depth: 1,
            ..Default::default()
        };
        assert_eq!(
            tokenize_with("- a\n    - b", &opts),
            vec![Token::List {
                ordered: false,
                items: vec![item("a", vec![]), item("b", vec![])]
            }]
        );
    }

    #[test]
    fn nesting_limit_keeps_deep_quotes_as_text() {
        let opts = ParseOptions {
            max_nesting_depth: 1,
            ..Default::default()
        };
        assert_eq!(
            tokenize_with("> > x", &opts),
            vec![Token::Blockquote {
                children: vec![para("> x")]
            }]
        );
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let input = "> ".repeat(10_000) + "x";
        let tokens = tokenize(&input);
        assert_eq!(tokens.len(), 1);

        let mut depth = 0;
        let mut current = &tokens;
        while let [Token::Blockquote { children }] = current.as_slice() {
            depth += 1;
            current = children;
        }
        assert_eq!(depth, ParseOptions::default().max_nesting_depth);
    }
}
