use crate::ast::TableAlignment;

pub(super) const FENCE: &str = "```";

/// Width of the leading whitespace, with each tab counted as 4 columns.
pub(super) fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

/// Language tag of an opening fence. `line` is already left-trimmed.
pub(super) fn parse_fence_start(line: &str) -> Option<&str> {
    line.strip_prefix(FENCE).map(str::trim)
}

/// Three or more of one of `-`, `*`, `_`, optionally separated by whitespace.
pub(super) fn is_thematic_break(line: &str) -> bool {
    let mut marker = None;
    let mut count = 0u32;
    for c in line.chars() {
        match c {
            '-' | '*' | '_' => {
                if *marker.get_or_insert(c) != c {
                    return false;
                }
                count += 1;
            }
            c if c.is_whitespace() => continue,
            _ => return false,
        }
    }
    count >= 3
}

/// `#` to `######` followed by a single space. The text after that space is
/// returned untouched.
pub(super) fn parse_atx_heading(line: &str) -> Option<(u8, &str)> {
    let bytes = line.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if !(1..=6).contains(&level) || bytes.get(level) != Some(&b' ') {
        return None;
    }
    Some((level as u8, &line[level + 1..]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ListMarker<'a> {
    pub ordered: bool,
    pub content: &'a str,
}

/// `-`/`+` or `<digits>.` followed by at least one whitespace character.
/// `line` is already left-trimmed.
pub(super) fn parse_list_marker(line: &str) -> Option<ListMarker<'_>> {
    let (ordered, rest) = if let Some(rest) = line.strip_prefix(['-', '+']) {
        (false, rest)
    } else {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        (true, line[digits..].strip_prefix('.')?)
    };
    let content = rest.trim_start();
    if content.len() == rest.len() {
        return None;
    }
    Some(ListMarker { ordered, content })
}

/// Drop leading whitespace, one run of `>` and at most one whitespace
/// character after it.
pub(super) fn strip_quote_marker(line: &str) -> &str {
    let rest = line.trim_start().trim_start_matches('>');
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

/// A separator row such as `-|-`, `| :--- | ---: |` or `:-:|:-:`: optional
/// outer pipes around at least two `:?-+:?` cells.
pub(super) fn is_table_separator(line: &str) -> bool {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    let mut cells = 0;
    for cell in inner.split('|') {
        let c = cell.trim();
        let c = c.strip_prefix(':').unwrap_or(c);
        let c = c.strip_suffix(':').unwrap_or(c);
        if c.is_empty() || !c.bytes().all(|b| b == b'-') {
            return false;
        }
        cells += 1;
    }
    cells >= 2
}

/// Split a table line on `|`, skipping zero-length pieces (so outer pipes add
/// no cells) and trimming the rest.
pub(super) fn split_table_row(line: &str) -> Vec<String> {
    line.split('|')
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Alignment per separator cell: `:-:` center, `-:` right, otherwise left.
pub(super) fn parse_table_alignments(line: &str) -> Vec<TableAlignment> {
    line.split('|')
        .filter(|cell| !cell.is_empty())
        .map(|cell| {
            let c = cell.trim();
            match (c.starts_with(':'), c.ends_with(':')) {
                (true, true) => TableAlignment::Center,
                (false, true) => TableAlignment::Right,
                _ => TableAlignment::Left,
            }
        })
        .collect()
}
