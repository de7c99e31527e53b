#[macro_use]
mod macros;

mod config;
mod health;
mod page;

use actix::prelude::*;

pub use config::*;
pub use health::*;
pub use page::*;

use crate::toc::FetchFailure;

#[derive(Clone)]
pub struct GlobalState {
    pub config: WikiConfig,
    pub fetcher: Addr<crate::fetch::Fetcher>,
}

impl GlobalState {
    pub fn new(config: WikiConfig, fetch: FetchConfig) -> Result<Self, FetchFailure> {
        Ok(Self {
            config,
            fetcher: crate::fetch::Fetcher::new(fetch)?.start(),
        })
    }
}
