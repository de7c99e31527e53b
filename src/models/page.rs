use crate::toc::{FetchFailure, RelativeLocation, TocView};

actor_message!(FetchPage(url: String) -> String | FetchFailure);

#[cfg(test)]
actor_message!(ServePage(url: String, html: String) -> ());

#[cfg(test)]
actor_message!(GetFetchCount() -> usize);

#[derive(Serialize, Deserialize)]
pub struct TocV1 {
    pub title: String,
    pub toc: Option<String>,
    pub errors: Vec<String>,
}

json_responder!(TocV1);

impl From<TocView> for TocV1 {
    fn from(view: TocView) -> Self {
        Self {
            title: view.title,
            toc: view.toc,
            errors: view.errors,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LocationRequestV1 {
    pub target_wiki_page: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LocationV1 {
    pub location: String,
    pub segments: Vec<String>,
    pub route: String,
}

json_responder!(LocationV1);

impl From<RelativeLocation> for LocationV1 {
    fn from(location: RelativeLocation) -> Self {
        Self {
            location: location.to_string(),
            route: location.route_path(),
            segments: location.segments().to_vec(),
        }
    }
}
