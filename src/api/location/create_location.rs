use crate::api::APIError;
use crate::models::*;
use crate::toc::locate_submission;
use actix_web::{post, web};

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
#[post("/api/v1/location")]
pub async fn create_location_v1(
    state: web::Data<GlobalState>,
    body: web::Json<LocationRequestV1>,
) -> Result<LocationV1, APIError> {
    locate_submission(body.target_wiki_page.as_deref(), &state.config)
        .map(|location| location.into())
        .map_err(|err| err.into())
}
