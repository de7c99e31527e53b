//! Locating and rewriting the table of contents of a wiki page.
//!
//! [`RelativeLocation`] maps a page URL onto a route path and back.
//! [`extract_toc`] pulls the TOC out of a fetched page, resolving its links with
//! [`UrlComponents`].

mod error;
mod location;
mod rewrite;
mod url;
mod view;

#[cfg(test)]
pub mod fixtures;

pub use error::{FetchFailure, TocError};
pub use location::RelativeLocation;
pub use rewrite::extract_toc;
pub use url::UrlComponents;
pub use view::{locate_submission, TocView, DEFAULT_TITLE};
