//! Utility functions and helpers.

pub mod http;
pub mod logging;
pub mod url;

pub use http::{Fetcher, PageSource, create_async_client};
