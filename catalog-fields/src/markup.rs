//! Plain-text rendering of rich text (HTML fragment) values.

use scraper::node::Node;
use scraper::{ElementRef, Html};

const BLOCK_TAGS: &[&str] = &[
    "p", "br", "div", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "td", "th",
    "blockquote", "pre", "hr", "table", "section", "article",
];

/// Elements whose content is never shown to a reader.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// Parses `html` as a fragment and returns its visible text.
///
/// Block-level elements become word breaks, inline elements vanish, so
/// `<p>Hello</p><p><b>wor</b>ld</p>` renders as `Hello world`. Entities are
/// decoded by the parser; script and style content is dropped.
pub fn to_plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::with_capacity(html.len());
    collect_text(fragment.root_element(), &mut text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if HIDDEN_TAGS.contains(&name) {
                continue;
            }
            let block = BLOCK_TAGS.contains(&name);
            if block {
                out.push(' ');
            }
            collect_text(child_element, out);
            if block {
                out.push(' ');
            }
        } else if let Node::Text(text) = child.value() {
            out.push_str(text);
        }
    }
}
