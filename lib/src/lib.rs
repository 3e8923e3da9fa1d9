pub mod config;
pub mod error;
pub mod html;
pub mod redact;
pub mod tree;
pub mod util;

pub use self::error::*;
pub use self::redact::*;
