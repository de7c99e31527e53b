use super::load_toc_view;
use crate::api::templates::ViewWikiToc;
use crate::api::APIError;
use crate::models::*;
use actix_web::{routes, web, HttpRequest};

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[routes]
#[get("/wiki_toc")]
#[get("/wiki_toc/{wiki_location:.*}")]
pub async fn view_wiki_toc(
    req: HttpRequest,
    state: web::Data<GlobalState>,
) -> Result<ViewWikiToc, APIError> {
    let view = load_toc_view(&req, &state).await?;
    Ok(ViewWikiToc::new(view, "/".to_string()))
}
