pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_html_into(&mut out, input);
    out
}

/// Text-content escaping: `&`, `<` and `>` only.
#[inline]
pub(crate) fn escape_html_into(out: &mut String, input: &str) {
    escape_with(out, input, &TEXT_ESCAPES);
}

/// Attribute-value escaping: text escaping plus `"`.
#[inline]
pub(crate) fn escape_attr_into(out: &mut String, input: &str) {
    escape_with(out, input, &ATTR_ESCAPES);
}

static TEXT_ESCAPES: [bool; 256] = escape_table(false);
static ATTR_ESCAPES: [bool; 256] = escape_table(true);

const fn escape_table(quotes: bool) -> [bool; 256] {
    let mut t = [false; 256];
    t[b'&' as usize] = true;
    t[b'<' as usize] = true;
    t[b'>' as usize] = true;
    t[b'"' as usize] = quotes;
    t
}

fn escape_with(out: &mut String, input: &str, table: &[bool; 256]) {
    let bytes = input.as_bytes();
    let mut last = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if !table[b as usize] {
            continue;
        }
        let replacement = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => unreachable!(),
        };
        // every escaped byte is ASCII, so `last..i` always lies on char boundaries
        out.push_str(&input[last..i]);
        out.push_str(replacement);
        last = i + 1;
    }

    out.push_str(&input[last..]);
}

/// Reduce rendered markup to the text a browser would show for it: tags are
/// dropped and the entities this crate emits are decoded once.
pub(crate) fn to_plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        push_decoded(&mut out, &rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                rest = "";
                break;
            }
        }
    }
    push_decoded(&mut out, rest);
    out
}

fn push_decoded(out: &mut String, text: &str) {
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"')]
            .into_iter()
            .find(|(entity, _)| tail.starts_with(entity));
        match decoded {
            Some((entity, ch)) => {
                out.push(ch);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
}
