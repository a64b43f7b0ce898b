use super::{Stash, rewrite};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)((?:https?://|www\.)[^\s<]+)").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

const PASSTHROUGH_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

/// Normalize a link destination: known schemes pass through, protocol-relative
/// URLs get `https:` and everything else is treated as a host.
///
/// # Examples
///
/// ```
/// use marky::normalize_url;
///
/// assert_eq!(normalize_url(" HTTP://a.b "), "HTTP://a.b");
/// assert_eq!(normalize_url("//cdn.test/x"), "https://cdn.test/x");
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// ```
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if PASSTHROUGH_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_ascii_case(trimmed, scheme))
    {
        trimmed.to_string()
    } else if trimmed.starts_with("//") {
        format!("https:{trimmed}")
    } else {
        format!("https://{trimmed}")
    }
}

#[inline]
fn starts_with_ignore_ascii_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn anchor_open(href: &str) -> String {
    format!("<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">")
}

/// Bare `http://`, `https://` and `www.` URLs at the start of the text or after
/// whitespace. The visible text is the URL as written.
pub(super) fn autolinks(buf: String, stash: &mut Stash) -> String {
    rewrite(buf, &BARE_URL, |caps: &Captures| {
        let url = &caps[2];
        let anchor = format!("{}{url}</a>", anchor_open(&normalize_url(url)));
        format!("{}{}", &caps[1], stash.protect(&anchor))
    })
}

/// `![alt](src)`; both attributes are copied as written.
pub(super) fn images(buf: String, stash: &mut Stash) -> String {
    rewrite(buf, &IMAGE, |caps: &Captures| {
        stash.protect(&format!("<img src=\"{}\" alt=\"{}\" />", &caps[2], &caps[1]))
    })
}

/// `[text](url)`. Only the opening tag is stashed; the link text stays in the
/// buffer for the emphasis and code passes.
pub(super) fn links(buf: String, stash: &mut Stash) -> String {
    rewrite(buf, &LINK, |caps: &Captures| {
        let open = stash.protect(&anchor_open(&normalize_url(&caps[2])));
        format!("{open}{}</a>", &caps[1])
    })
}
