//! Text utilities.
//!
//! ## Key Components
//!
//! - **`string`**: case changes, whitespace handling, numeric parsing,
//!   character statistics and printf-style formatting.
//! - **`base64`**: UTF-8 base64 encoding plus validation and padding helpers
//!   for the standard and URL-safe alphabets.

pub mod base64;
pub mod string;

pub use self::base64::IsBase64Options;
pub use self::string::{FormatArg, RemoveSpaceOptions};
