use super::load_toc_view;
use crate::api::APIError;
use crate::models::*;
use actix_web::{get, web, HttpRequest};

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[get("/api/v1/toc/{wiki_location:.*}")]
pub async fn get_toc_v1(
    req: HttpRequest,
    state: web::Data<GlobalState>,
) -> Result<TocV1, APIError> {
    load_toc_view(&req, &state).await.map(|view| view.into())
}
