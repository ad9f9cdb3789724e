use scraper::{Html, Selector};

/// One `<img>` element from the page, in document order.
///
/// `source` carries the best-available source URL, preferring the lazy-load
/// `data-src` attribute over `src`. `index` is the element's position in the
/// document and feeds fallback naming and the progress denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub source: Option<String>,
    pub index: usize,
}

/// Collect every image element on the page, preserving document order.
/// Elements without any source attribute are kept; they still count toward
/// the progress denominator.
pub fn extract_candidates(html: &str) -> Vec<ImageCandidate> {
    let doc = Html::parse_document(html);
    let Ok(selector) = Selector::parse("img") else {
        return Vec::new();
    };

    doc.select(&selector)
        .enumerate()
        .map(|(index, element)| {
            let attrs = element.value();
            ImageCandidate {
                source: attrs
                    .attr("data-src")
                    .or_else(|| attrs.attr("src"))
                    .map(str::to_string),
                index,
            }
        })
        .collect()
}
