use crate::api::APIError;
use crate::models::*;
use crate::toc::FetchFailure;
use crate::telemetry::in_current_span;
use crate::trace_handler;
use actix::prelude::*;
use tracing::{debug, warn};

/// Fetches wiki pages over HTTP(S).
pub struct HttpFetcher {
    started_at: chrono::DateTime<chrono::Utc>,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchFailure> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|err| FetchFailure::new(format!("could not build the HTTP client: {err}")))?;

        Ok(Self {
            started_at: chrono::Utc::now(),
            client,
        })
    }
}

impl Actor for HttpFetcher {
    type Context = Context<Self>;
}

trace_handler!(HttpFetcher, GetHealth, Result<Health, APIError>);

impl Handler<GetHealth> for HttpFetcher {
    type Result = Result<Health, APIError>;

    fn handle(&mut self, _: GetHealth, _: &mut Self::Context) -> Self::Result {
        Ok(Health {
            ok: true,
            started_at: self.started_at,
        })
    }
}

trace_handler!(
    HttpFetcher,
    FetchPage,
    ResponseFuture<Result<String, FetchFailure>>
);

impl Handler<FetchPage> for HttpFetcher {
    type Result = ResponseFuture<Result<String, FetchFailure>>;

    fn handle(&mut self, msg: FetchPage, _: &mut Self::Context) -> Self::Result {
        let client = self.client.clone();

        in_current_span(async move {
            debug!("Fetching '{}'", msg.url);

            let response = client
                .get(&msg.url)
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|err| {
                    warn!({ exception.message = %err }, "Failed to fetch '{}'", msg.url);
                    FetchFailure::new(err.to_string())
                })?;

            response
                .text()
                .await
                .map_err(|err| FetchFailure::new(format!("could not read the page body: {err}")))
        })
    }
}
