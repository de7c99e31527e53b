use super::{TocError, UrlComponents};
use kuchikikiki::iter::NodeIterator;
use kuchikikiki::traits::TendrilSink;
use kuchikikiki::{ElementData, NodeDataRef, NodeRef};
use tracing::debug;

/// The `target` given to every TOC link so that it opens in a new window.
pub const NEW_WINDOW_TARGET: &str = "_NEW";

const TOC_SELECTOR: &str = "div#toc";

pub fn parse_document(html: &str) -> NodeRef {
    kuchikikiki::parse_html().one(html)
}

/// Finds the first `<div id="toc">` in document order.
pub fn locate(document: &NodeRef) -> Option<NodeDataRef<ElementData>> {
    document.select_first(TOC_SELECTOR).ok()
}

/// Points every relative link inside `toc` at `reference` and marks all links
/// to open in a new window. Nothing outside the anchors' attributes is touched.
pub fn rewrite_links(toc: &NodeDataRef<ElementData>, reference: &UrlComponents) {
    let anchors = match toc.as_node().descendants().select("a") {
        Ok(anchors) => anchors,
        Err(()) => return,
    };

    for anchor in anchors {
        let mut attributes = anchor.attributes.borrow_mut();

        let resolved = attributes
            .get("href")
            .map(UrlComponents::parse)
            .filter(UrlComponents::is_relative)
            .map(|href| href.resolve_against(reference).to_string());

        if let Some(href) = resolved {
            debug!(href = %href, "Rewrote relative TOC link");
            attributes.insert("href", href);
        }

        attributes.insert("target", NEW_WINDOW_TARGET.to_string());
    }
}

/// Parses `html`, rewrites its TOC against `reference` and returns the TOC's outer HTML.
pub fn extract_toc(html: &str, reference: &UrlComponents) -> Result<String, TocError> {
    let document = parse_document(html);
    let toc = locate(&document).ok_or(TocError::NoTocFound)?;
    rewrite_links(&toc, reference);
    Ok(toc.as_node().to_string())
}
