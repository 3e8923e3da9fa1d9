mod redact;

pub use self::redact::*;
