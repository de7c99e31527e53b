use thiserror::Error;

/// Everything that can go wrong between a form submission and a rendered TOC.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TocError {
    /// The submission did not carry a target page at all.
    #[error("Cannot locate the wikipedia page for unspecified location.")]
    MissingField,

    #[error("'{0}' is not a valid wikipedia url. Please try again.")]
    InvalidLocation(String),

    #[error("No wikipedia location has been provided.")]
    EmptyLocation,

    #[error("Could not get the table of contents for '{location}'.")]
    Fetch { location: String },

    #[error("No table of contents is available.")]
    NoTocFound,
}

/// An opaque fetch failure. Network errors, bad statuses and unreadable bodies
/// all end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FetchFailure {
    pub reason: String,
}

impl FetchFailure {
    pub fn new<S: Into<String>>(reason: S) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
