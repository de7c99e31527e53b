use crate::api::templates::ChooseWikiPage;
use crate::api::APIError;
use crate::models::*;
use crate::toc::{locate_submission, TocError, DEFAULT_TITLE};
use actix_web::http::header::LOCATION;
use actix_web::{get, post, web, Either, HttpResponse};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ChooseWikiPageForm {
    pub target_wiki_page: Option<String>,
}

fn form_page(errors: Vec<String>) -> ChooseWikiPage {
    ChooseWikiPage {
        title: DEFAULT_TITLE.to_string(),
        post_url: "/".to_string(),
        errors,
    }
}

#[tracing::instrument(fields(otel.kind = "internal"))]
#[get("/")]
pub async fn show_form() -> ChooseWikiPage {
    form_page(vec![])
}

/// Redirects to the TOC view of the submitted page, or shows the form again
/// with the reason the page was rejected.
#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[post("/")]
pub async fn submit_form(
    state: web::Data<GlobalState>,
    form: web::Form<ChooseWikiPageForm>,
) -> Result<Either<HttpResponse, ChooseWikiPage>, APIError> {
    match locate_submission(form.target_wiki_page.as_deref(), &state.config) {
        Ok(location) => {
            let route = location.route_path();
            info!("Redirecting to the contents of '{}'", location);
            Ok(Either::Left(
                HttpResponse::Found()
                    .insert_header((LOCATION, route))
                    .finish(),
            ))
        }
        Err(err @ TocError::MissingField) => Err(err.into()),
        Err(err) => Ok(Either::Right(form_page(vec![err.to_string()]))),
    }
}
