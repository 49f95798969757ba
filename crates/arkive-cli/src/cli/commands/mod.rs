//! CLI command handlers, grouped by the library module they drive.

mod extract;
mod filename;
mod net;
mod rand;
mod tools;
mod writable;

pub use extract::{run_extract, run_is_url, run_normalize};
pub use filename::run_filename;
pub use net::{run_real_uri, run_tiny, run_tor};
pub use rand::run_rand;
pub use tools::{run_chrome, run_webp};
pub use writable::run_writable;
