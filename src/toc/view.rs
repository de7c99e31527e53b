use super::{extract_toc, FetchFailure, RelativeLocation, TocError, UrlComponents};
use crate::models::WikiConfig;
use tracing::{error, warn};

pub const DEFAULT_TITLE: &str = "Table of Contents Scraper";
pub const NO_LOCATION_TITLE: &str = "No wikipedia page provided";

/// Turns the `target_wiki_page` field of a submission into the location to redirect to.
///
/// Partial inputs are completed using the configured scheme and domain, so
/// `/wiki/Satchel` becomes `wikipedia.org/wiki/Satchel`.
pub fn locate_submission(
    target_wiki_page: Option<&str>,
    config: &WikiConfig,
) -> Result<RelativeLocation, TocError> {
    let target = target_wiki_page
        .filter(|t| !t.is_empty())
        .ok_or(TocError::MissingField)?;

    let url = UrlComponents::parse_with_fallback(
        target,
        Some(config.scheme.as_str()),
        Some(config.domain_suffix.as_str()),
    );

    RelativeLocation::encode(&url.to_string(), &config.domain_suffix).map_err(|_| {
        error!("User supplied url, '{}', is not a valid wikipedia url.", target);
        TocError::InvalidLocation(target.to_string())
    })
}

/// Everything needed to render the TOC of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocView {
    pub title: String,
    pub toc: Option<String>,
    pub errors: Vec<String>,
}

impl TocView {
    /// The view shown when the route carried no location.
    pub fn missing_location() -> Self {
        Self {
            title: NO_LOCATION_TITLE.to_string(),
            toc: None,
            errors: vec![TocError::EmptyLocation.to_string()],
        }
    }

    /// Builds the view for `location` from the outcome of fetching `url`.
    pub fn from_page(
        location: &RelativeLocation,
        url: &str,
        page: Result<String, FetchFailure>,
    ) -> Self {
        let title = location.to_string();
        let reference = UrlComponents::parse(url);

        let result = page
            .map_err(|err| {
                error!(
                    "Failed to process the contents of '{}' due to error: {}",
                    url, err
                );
                TocError::Fetch {
                    location: title.clone(),
                }
            })
            .and_then(|html| extract_toc(&html, &reference));

        match result {
            Ok(toc) => Self {
                title,
                toc: Some(toc),
                errors: vec![],
            },
            Err(err) => {
                warn!("No table of contents for '{}': {}", url, err);
                Self {
                    title,
                    toc: None,
                    errors: vec![err.to_string()],
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::fixtures::SATCHEL_PAGE;

    #[test]
    fn submission_with_absolute_path() {
        let location = locate_submission(Some("/wiki/Satchel"), &WikiConfig::default())
            .expect("a valid location");
        assert_eq!(location.to_string(), "wikipedia.org/wiki/Satchel");
    }

    #[test]
    fn submission_with_full_url() {
        let location = locate_submission(
            Some("https://en.wikipedia.org/wiki/Satchel"),
            &WikiConfig::default(),
        )
        .expect("a valid location");
        assert_eq!(location.segments(), ["en.wikipedia.org", "wiki", "Satchel"]);
        assert_eq!(location.route_path(), "/wiki_toc/en.wikipedia.org/wiki/Satchel");
    }

    #[test]
    fn submission_without_scheme() {
        let location =
            locate_submission(Some("en.wikipedia.org/wiki/Satchel"), &WikiConfig::default())
                .expect("a valid location");
        assert_eq!(location.to_string(), "en.wikipedia.org/wiki/Satchel");
    }

    #[test]
    fn submission_reports_raw_input() {
        assert_eq!(
            locate_submission(Some("example.com/wiki/Satchel"), &WikiConfig::default()),
            Err(TocError::InvalidLocation("example.com/wiki/Satchel".into()))
        );
    }

    #[test]
    fn submission_missing_field() {
        assert_eq!(
            locate_submission(None, &WikiConfig::default()),
            Err(TocError::MissingField)
        );
        assert_eq!(
            locate_submission(Some(""), &WikiConfig::default()),
            Err(TocError::MissingField)
        );
    }

    #[test]
    fn submission_uses_configured_domain() {
        let config = WikiConfig {
            scheme: "http://".into(),
            domain_suffix: "wiki.example.org".into(),
        };
        let location =
            locate_submission(Some("/wiki/Satchel"), &config).expect("a valid location");
        assert_eq!(location.to_string(), "wiki.example.org/wiki/Satchel");
        assert!(locate_submission(Some("https://en.wikipedia.org/wiki/Satchel"), &config).is_err());
    }

    #[test]
    fn view_missing_location() {
        let view = TocView::missing_location();
        assert_eq!(view.title, NO_LOCATION_TITLE);
        assert_eq!(view.toc, None);
        assert_eq!(view.errors, vec!["No wikipedia location has been provided."]);
    }

    #[test]
    fn view_from_page() {
        let location = RelativeLocation::from_route_tail("en.wikipedia.org/wiki/Satchel");
        let url = location.decode("https://");
        let view = TocView::from_page(&location, &url, Ok(SATCHEL_PAGE.to_string()));

        assert_eq!(view.title, "en.wikipedia.org/wiki/Satchel");
        assert!(view.errors.is_empty());
        let toc = view.toc.expect("a rewritten TOC");
        assert!(toc.contains(r#"href="https://en.wikipedia.org/wiki/Satchel#See_also""#));
    }

    #[test]
    fn view_from_failed_fetch() {
        let location = RelativeLocation::from_route_tail("en.wikipedia.org/wiki/Satchel");
        let url = location.decode("https://");
        let view = TocView::from_page(&location, &url, Err(FetchFailure::new("HTTP 404")));

        assert_eq!(view.title, "en.wikipedia.org/wiki/Satchel");
        assert_eq!(view.toc, None);
        assert_eq!(
            view.errors,
            vec!["Could not get the table of contents for 'en.wikipedia.org/wiki/Satchel'."]
        );
    }

    #[test]
    fn view_from_page_without_toc() {
        let location = RelativeLocation::from_route_tail("en.wikipedia.org/wiki/Stub");
        let url = location.decode("https://");
        let view = TocView::from_page(&location, &url, Ok("<p>Short article.</p>".to_string()));

        assert_eq!(view.toc, None);
        assert_eq!(view.errors, vec!["No table of contents is available."]);
    }
}
