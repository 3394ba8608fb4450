// src/core/html.rs
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector from a constant. Only called from `LazyLock` statics
/// holding the markup signatures in `config::consts`.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

/// All text under `el`, concatenated as-is and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// All text under `el` except what sits inside `skip`, whitespace collapsed.
/// Text fragments are joined with a single space.
pub fn text_without(el: ElementRef<'_>, skip: Option<ElementRef<'_>>) -> String {
    let skip_id = skip.map(|s| s.id());
    let mut parts: Vec<&str> = Vec::new();

    for node in el.descendants() {
        let Some(text) = node.value().as_text() else { continue };
        if let Some(id) = skip_id {
            if node.ancestors().any(|a| a.id() == id) {
                continue;
            }
        }
        let t = text.trim();
        if !t.is_empty() {
            parts.push(t);
        }
    }
    normalize_ws(&parts.join(" "))
}

/// First descendant matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}
