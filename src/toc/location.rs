use super::{TocError, UrlComponents};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

/// Route under which an encoded location is served.
pub const TOC_ROUTE: &str = "/wiki_toc";

/// Characters which would change the meaning of a route path if left as-is.
/// `%` is escaped too, so an escape already in the page URL reaches the view intact.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A scheme-less address of a wiki page, split into its `/`-separated segments.
///
/// `https://en.wikipedia.org/wiki/Satchel` is stored as
/// `["en.wikipedia.org", "wiki", "Satchel"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelativeLocation {
    segments: Vec<String>,
}

impl RelativeLocation {
    /// Encodes an absolute URL, rejecting it unless its host ends with `domain_suffix`.
    pub fn encode(absolute_url: &str, domain_suffix: &str) -> Result<Self, TocError> {
        let url = UrlComponents::parse(absolute_url);
        if !url.matches_domain(domain_suffix) {
            return Err(TocError::InvalidLocation(absolute_url.to_string()));
        }

        let relative = url.without_scheme().to_string();
        Ok(Self::from_non_empty(relative.trim_matches('/').split('/')))
    }

    /// Builds a location from a matched route tail such as `en.wikipedia.org/wiki/Satchel`.
    ///
    /// The router has already decoded every escape except `%2F`, `%25` and `%2B`,
    /// so the remaining ones are decoded here exactly once.
    pub fn from_route_tail(tail: &str) -> Self {
        let decoded = percent_decode_str(tail).decode_utf8_lossy();
        Self::from_non_empty(decoded.split('/'))
    }

    /// Wraps the given segments as they are, empty ones included.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    fn from_non_empty<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_segments(segments.into_iter().filter(|s| !s.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when no location was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Turns the location back into a fetchable URL by prepending `default_scheme`.
    pub fn decode(&self, default_scheme: &str) -> String {
        format!("{default_scheme}{self}")
    }

    /// The path of the TOC view for this location, safe to use in a `Location` header.
    pub fn route_path(&self) -> String {
        let mut path = String::from(TOC_ROUTE);
        for segment in &self.segments {
            path.push('/');
            path.extend(utf8_percent_encode(segment, SEGMENT));
        }
        path
    }
}

impl fmt::Display for RelativeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
