//! Commonly used items for convenient importing.
//!
//! ```rust
//! use stackerr::prelude::*;
//!
//! fn parse(input: &str) -> Result<u16, StackError> {
//!     input.parse().map_err(|err| handle!(err, "parse", input))
//! }
//!
//! assert!(parse("65536").is_err());
//! ```

pub use crate::{StackErr, StackError, function_name, handle, result_ext::ResultExt};
