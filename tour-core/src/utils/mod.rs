//! This module contains helper functionality.

mod error;
pub use self::error::*;

mod logging;
pub use self::logging::*;
