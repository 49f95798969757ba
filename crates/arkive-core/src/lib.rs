pub mod config;
pub mod error;
pub mod logging;

pub mod chrome;
pub mod convert;
pub mod env;
pub mod net;
pub mod retry;
pub mod storage;
pub mod text;
pub mod url_model;

pub use error::{HelperError, Result};
pub use url_model::{extract_urls, is_url, normalize};
