use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use crate::error::*;
use crate::util;

pub fn parse_file(filename: &Path) -> Result<kuchikiki::NodeRef, RedactorError> {
    use html5ever::tendril::TendrilSink;

    let mut f = util::open_file(filename).map_err(RedactorError::OpenFile)?;

    let dom = kuchikiki::parse_html()
        .from_utf8()
        .read_from(&mut f)
        .map_err(RedactorError::ReadFile)?;

    Ok(dom)
}

pub fn write_node(writer: &mut impl Write, node: &kuchikiki::NodeRef) -> Result<(), RedactorError> {
    html5ever::serialize(writer, node, Default::default())
        .map_err(|err| RedactorError::Serialize(Cow::Owned(err.to_string())))
}

pub fn write_file(filename: &Path, node: &kuchikiki::NodeRef) -> Result<(), RedactorError> {
    let mut file = util::create_file(filename).map_err(RedactorError::CreateFile)?;

    write_node(&mut file, node)?;
    file.flush().map_err(RedactorError::WriteFile)?;

    Ok(())
}
