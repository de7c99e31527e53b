#[cfg(test)]
mod memory;

#[cfg(test)]
pub type Fetcher = memory::MemoryFetcher;

#[cfg(not(test))]
mod client;

#[cfg(not(test))]
pub type Fetcher = client::HttpFetcher;
