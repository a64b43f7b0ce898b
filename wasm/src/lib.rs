use marky::{ParseOptions, derive_title_with, render_with, tokenize_with};
use wasm_bindgen::prelude::*;

/// Install the panic hook so a panic shows up readable in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();
}

fn build_options(hard_breaks: Option<bool>, fallback_title: Option<String>) -> ParseOptions {
    let defaults = ParseOptions::default();
    ParseOptions {
        hard_breaks: hard_breaks.unwrap_or(defaults.hard_breaks),
        fallback_title: fallback_title.unwrap_or(defaults.fallback_title),
        ..defaults
    }
}

/// Markdown to HTML in one call.
#[wasm_bindgen]
pub fn render(markdown: &str, hard_breaks: Option<bool>) -> String {
    let opts = build_options(hard_breaks, None);
    render_with(&tokenize_with(markdown, &opts), &opts)
}

/// The token tree as JSON.
#[wasm_bindgen]
pub fn tokenize(markdown: &str) -> String {
    let tokens = tokenize_with(markdown, &ParseOptions::default());
    serde_json::to_string(&tokens).unwrap_or_default()
}

#[wasm_bindgen(js_name = "deriveTitle")]
pub fn derive_title(markdown: &str, fallback_title: Option<String>) -> String {
    let opts = build_options(None, fallback_title);
    derive_title_with(&tokenize_with(markdown, &opts), &opts)
}

/// Preview markup and document title from a single tokenization.
#[wasm_bindgen]
pub struct Preview {
    html: String,
    title: String,
}

#[wasm_bindgen]
impl Preview {
    #[wasm_bindgen(getter)]
    pub fn html(&self) -> String {
        self.html.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }
}

#[wasm_bindgen]
pub fn preview(markdown: &str, hard_breaks: Option<bool>) -> Preview {
    let opts = build_options(hard_breaks, None);
    let tokens = tokenize_with(markdown, &opts);
    Preview {
        html: render_with(&tokens, &opts),
        title: derive_title_with(&tokens, &opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shares_one_tokenization() {
        let p = preview("# Notes\nbody", None);
        assert_eq!(p.html(), "<h1>Notes</h1><p>body</p>");
        assert_eq!(p.title(), "Notes");
    }

    #[test]
    fn render_honors_soft_breaks() {
        assert_eq!(render("a\nb", Some(false)), "<p>a\nb</p>");
        assert_eq!(render("a\nb", None), "<p>a<br>b</p>");
    }

    #[test]
    fn tokenize_returns_json() {
        assert_eq!(
            tokenize("---"),
            "[{\"type\":\"horizontal_rule\"}]"
        );
    }

    #[test]
    fn derive_title_uses_fallback() {
        assert_eq!(derive_title("plain", Some("untitled.md".into())), "untitled.md");
        assert_eq!(derive_title("plain", None), "Marky");
    }
}
