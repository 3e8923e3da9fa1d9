mod document;
mod element;
mod file;
mod find_elements;

#[cfg(test)]
mod test_only;

pub use self::document::*;
pub use self::element::*;
pub use self::file::*;
pub use self::find_elements::*;

#[cfg(test)]
pub use self::test_only::*;
