use crate::api::APIError;
use crate::models::*;
use crate::toc::FetchFailure;
use crate::trace_handler;
use actix::prelude::*;
use std::collections::BTreeMap;

/// Serves pages registered with [`ServePage`] and counts every fetch attempt.
pub struct MemoryFetcher {
    started_at: chrono::DateTime<chrono::Utc>,
    pages: BTreeMap<String, String>,
    fetches: usize,
}

impl MemoryFetcher {
    pub fn new(_config: FetchConfig) -> Result<Self, FetchFailure> {
        Ok(Self {
            started_at: chrono::Utc::now(),
            pages: BTreeMap::new(),
            fetches: 0,
        })
    }
}

impl Actor for MemoryFetcher {
    type Context = Context<Self>;
}

trace_handler!(MemoryFetcher, GetHealth, Result<Health, APIError>);

impl Handler<GetHealth> for MemoryFetcher {
    type Result = Result<Health, APIError>;

    fn handle(&mut self, _: GetHealth, _: &mut Self::Context) -> Self::Result {
        Ok(Health {
            ok: true,
            started_at: self.started_at,
        })
    }
}

trace_handler!(MemoryFetcher, FetchPage, Result<String, FetchFailure>);

impl Handler<FetchPage> for MemoryFetcher {
    type Result = Result<String, FetchFailure>;

    fn handle(&mut self, msg: FetchPage, _: &mut Self::Context) -> Self::Result {
        self.fetches += 1;

        self.pages
            .get(&msg.url)
            .cloned()
            .ok_or_else(|| FetchFailure::new(format!("HTTP status client error (404 Not Found) for url ({})", msg.url)))
    }
}

impl Handler<ServePage> for MemoryFetcher {
    type Result = Result<(), APIError>;

    fn handle(&mut self, msg: ServePage, _: &mut Self::Context) -> Self::Result {
        self.pages.insert(msg.url, msg.html);
        Ok(())
    }
}

impl Handler<GetFetchCount> for MemoryFetcher {
    type Result = Result<usize, APIError>;

    fn handle(&mut self, _: GetFetchCount, _: &mut Self::Context) -> Self::Result {
        Ok(self.fetches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn counts_every_fetch() {
        let fetcher = MemoryFetcher::new(FetchConfig::default())
            .expect("a fetcher")
            .start();

        fetcher
            .send(ServePage {
                url: "https://en.wikipedia.org/wiki/Satchel".into(),
                html: "<div id=\"toc\"></div>".into(),
            })
            .await
            .expect("the actor should be run")
            .expect("the operation should succeed");

        let page = fetcher
            .send(FetchPage {
                url: "https://en.wikipedia.org/wiki/Satchel".into(),
            })
            .await
            .expect("the actor should be run");
        assert_eq!(page, Ok("<div id=\"toc\"></div>".to_string()));

        let missing = fetcher
            .send(FetchPage {
                url: "https://en.wikipedia.org/wiki/Missing".into(),
            })
            .await
            .expect("the actor should be run");
        assert!(missing.is_err());

        let count = fetcher
            .send(GetFetchCount {})
            .await
            .expect("the actor should be run")
            .expect("the operation should succeed");
        assert_eq!(count, 2);
    }
}
