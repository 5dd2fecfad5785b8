pub mod core;
pub mod fetcher;

pub use fetcher::{FetchOutcome, Fetcher, RequestSink};
