use crate::toc::TocError;
use actix_http::body::BoxBody;
use actix_web::{error, http::StatusCode, HttpResponse};
use std::fmt;
use tracing::{error, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct APIError {
    pub code: u16,
    pub error: String,
    pub message: String,
}

impl APIError {
    pub fn new(code: u16, error: &str, message: &str) -> Self {
        Self {
            code,
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

impl error::ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type("application/json; charset=utf-8")
            .json(self)
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for APIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HTTP {} {}] {}", self.code, self.error, self.message)
    }
}

impl From<TocError> for APIError {
    fn from(err: TocError) -> Self {
        let message = err.to_string();
        match err {
            TocError::MissingField => {
                error!("The form submission did not include a target wiki page");
                Self::new(500, "Internal Server Error", &message)
            }
            TocError::InvalidLocation(_) | TocError::EmptyLocation => {
                warn!("{}", message);
                Self::new(400, "Bad Request", &message)
            }
            TocError::Fetch { .. } => Self::new(502, "Bad Gateway", &message),
            TocError::NoTocFound => Self::new(404, "Not Found", &message),
        }
    }
}

impl From<actix::MailboxError> for APIError {
    fn from(err: actix::MailboxError) -> Self {
        error!({ exception.message = %err }, "We were unable to reach the page fetcher");

        Self::new(
            500,
            "Internal Server Error",
            "We ran into a problem, this has been reported and will be looked at.",
        )
    }
}

impl From<askama::Error> for APIError {
    fn from(err: askama::Error) -> Self {
        error!({ exception.message = %err }, "We were unable to render a page template");

        Self::new(
            500,
            "Internal Server Error",
            "We ran into a problem, this has been reported and will be looked at.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn toc_errors_map_to_status_codes() {
        let cases = [
            (TocError::MissingField, StatusCode::INTERNAL_SERVER_ERROR),
            (TocError::InvalidLocation("x".into()), StatusCode::BAD_REQUEST),
            (TocError::EmptyLocation, StatusCode::BAD_REQUEST),
            (TocError::Fetch { location: "x".into() }, StatusCode::BAD_GATEWAY),
            (TocError::NoTocFound, StatusCode::NOT_FOUND),
        ];

        for (err, status) in cases {
            let message = err.to_string();
            let api_error = APIError::from(err);
            assert_eq!(api_error.status_code(), status);
            assert_eq!(api_error.message, message);
        }
    }
}
