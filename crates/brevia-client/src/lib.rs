pub mod client;
pub mod error;
pub mod http;
pub mod models;
pub mod offline;

pub use client::SummarizerFactory;
pub use error::ClientError;
pub use http::{HttpConfig, HttpSummarizer};
pub use offline::{FixedSummarizer, PLACEHOLDER_SUMMARY};
