use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

use transferwatch_core::Headline;

/// Extract headline candidates from a listing page.
///
/// - Runs each selector in turn, appending its matches in document order
/// - Collapses each match's text to single-space-separated form
/// - Attaches the nearest enclosing anchor's href (or the element's own),
///   resolved against `base_url`
/// - Skips matches whose text collapses to empty
/// - Selectors that fail to parse are skipped with a warning
pub fn extract_headlines(html: &str, selectors: &[String], base_url: &str) -> Vec<Headline> {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    let mut headlines = Vec::new();

    for raw in selectors {
        let selector = match Selector::parse(raw) {
            Ok(s) => s,
            Err(_) => {
                warn!(selector = raw.as_str(), "Invalid CSS selector, skipping");
                continue;
            }
        };

        for element in document.select(&selector) {
            let text = normalize_text(&element);
            if text.is_empty() {
                continue;
            }

            let link = find_href(&element).and_then(|href| resolve(href, base.as_ref()));

            headlines.push(Headline { text, link });
        }
    }

    headlines
}

/// Collapse an element's text nodes to a single-space-separated string.
fn normalize_text(element: &ElementRef) -> String {
    let text: String = element.text().collect::<Vec<_>>().join(" ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The href a matched element navigates to: its own if it is an anchor,
/// otherwise the nearest ancestor anchor's.
fn find_href<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    if element.value().name() == "a" {
        if let Some(href) = element.value().attr("href") {
            return Some(href);
        }
    }

    let mut current = element.parent();
    while let Some(node) = current {
        if let Some(el) = ElementRef::wrap(node) {
            if el.value().name() == "a" {
                if let Some(href) = el.value().attr("href") {
                    return Some(href);
                }
            }
        }
        current = node.parent();
    }

    None
}

/// Resolve an href to an absolute URL. Fragment-only and javascript hrefs
/// carry no destination and are dropped.
fn resolve(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return None;
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    base?.join(href).ok().map(|u| u.to_string())
}
