//! Network address utilities.
//!
//! ## Key Components
//!
//! - **`url`**: parsing, query string editing and relative resolution built
//!   on the WHATWG-compliant `url` crate.

pub mod url;

pub use self::url::{get_domain, get_query_params, is_absolute_url, parse_url};
