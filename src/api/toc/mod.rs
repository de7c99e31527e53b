use crate::api::APIError;
use crate::models::*;
use crate::telemetry::TraceMessageExt;
use crate::toc::{RelativeLocation, TocView};
use actix_web::{web, HttpRequest};

mod get_toc;
mod view_wiki_toc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(view_wiki_toc::view_wiki_toc)
        .service(get_toc::get_toc_v1);
}

/// Fetches the page named by the `wiki_location` route tail and extracts its TOC.
///
/// Nothing is fetched when the route carries no location.
async fn load_toc_view(req: &HttpRequest, state: &GlobalState) -> Result<TocView, APIError> {
    let location =
        RelativeLocation::from_route_tail(req.match_info().get("wiki_location").unwrap_or_default());

    if location.is_empty() {
        return Ok(TocView::missing_location());
    }

    let url = location.decode(&state.config.scheme);
    let page = state
        .fetcher
        .send(FetchPage { url: url.clone() }.trace())
        .await?;

    Ok(TocView::from_page(&location, &url, page))
}
