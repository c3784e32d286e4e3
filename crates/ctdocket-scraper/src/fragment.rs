//! Top-level text extraction from HTML fragments.
//!
//! The portal's detail-page labels mix the value we want with nested markup,
//! e.g. the filing-date label renders as
//!
//! ```text
//! <span class="tooltip">Prefix text</span>03/02/2026
//! ```
//!
//! where only the top-level text node is the date. [`own_text`] takes an
//! element's inner HTML and returns exactly that: the concatenated text nodes
//! that are direct children of the fragment root, with descendant element
//! text ignored.

use scraper::{Html, Node};

/// Returns the trimmed top-level text of an HTML fragment, ignoring text
/// inside descendant elements.
#[must_use]
pub fn own_text(inner_html: &str) -> String {
    let dom = Html::parse_fragment(inner_html);
    let mut out = String::new();
    for child in dom.root_element().children() {
        if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
    out.trim().to_string()
}
