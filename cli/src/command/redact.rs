use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use redactor::config::RedactorConfig;
use redactor::html::{self, HtmlDocument};
use redactor::tree::Lookup;
use redactor::{RedactReport, Redactor, RedactorError};

use crate::error::*;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// "--output" wins, "--in-place" writes back to the input file, otherwise stdout.
    pub fn from_args(file: &Path, output: Option<PathBuf>, in_place: bool) -> Self {
        match (output, in_place) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::File(file.to_path_buf()),
            (None, false) => Self::Stdout,
        }
    }
}

pub fn redact(path: &Path, id: &str, target: OutputTarget, config: &RedactorConfig) -> Result<(), CliError> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();

            redact_to(path, id, &mut handle, config)?;
        }
        OutputTarget::File(output_path) => {
            let document = load_and_redact(path, id, config)?;

            document.write_file(&output_path)?;
            info!("Wrote {}", output_path.display());
        }
    }

    Ok(())
}

/// Redact the element and serialize the resulting document into `writer`.
pub fn redact_to(path: &Path, id: &str, writer: &mut impl Write, config: &RedactorConfig) -> Result<(), CliError> {
    let document = load_and_redact(path, id, config)?;

    html::write_node(&mut *writer, &document.root)?;
    writer.flush().map_err(RedactorError::WriteFile)?;

    Ok(())
}

fn load_and_redact(path: &Path, id: &str, config: &RedactorConfig) -> Result<HtmlDocument, CliError> {
    let mut document = HtmlDocument::from_file(path, config.classifier()?)?;

    let report = redact_document(&mut document, id)?;

    info!(
        "Redacted {} inputs in element '{}' of {}",
        report.inputs_redacted,
        id,
        path.display()
    );

    match serde_json::to_string(&report) {
        Ok(result) => debug!("Result: {}", result),
        Err(err) => debug!("Could not serialize result: {}", err),
    }

    Ok(document)
}

fn redact_document(document: &mut HtmlDocument, id: &str) -> Result<RedactReport, RedactorError> {
    let root = document.lookup(id).ok_or_else(|| RedactorError::not_found(id))?;

    Ok(Redactor::new(document).run(&root))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const HTML: &'static str = r#"<div id="form1"><input id="name" value="Alice"></div><input id="other" value="Bob">"#;

    #[test]
    fn can_redact_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.html");
        fs::write(&path, HTML).unwrap();

        let target = OutputTarget::from_args(&path, None, true);
        redact(&path, "form1", target, &RedactorConfig::default()).unwrap();

        let result = fs::read_to_string(&path).unwrap();
        assert!(result.contains(r#"<input id="name" value="<DELETED>">"#));
        assert!(result.contains(r#"<input id="other" value="Bob">"#));

        // Attribute order inside the tag is up to the serializer.
        let div_start = result.find("<div").unwrap();
        let div_tag = &result[div_start..div_start + result[div_start..].find('>').unwrap()];
        assert!(div_tag.contains(r#"id="form1""#));
        assert!(div_tag.contains(r#"hidden="""#));
    }

    #[test]
    fn missing_element_does_not_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.html");
        let output_path = dir.path().join("out.html");
        fs::write(&path, HTML).unwrap();

        let err = redact(&path, "missing-id", OutputTarget::File(output_path.clone()), &RedactorConfig::default())
            .unwrap_err();

        assert!(matches!(err.kind, CliErrorKind::NotFound));
        assert!(!output_path.exists());
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = redact(
            &dir.path().join("nope.html"),
            "form1",
            OutputTarget::Stdout,
            &RedactorConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err.kind, CliErrorKind::Config));
    }

    #[test]
    fn output_target_follows_flags() {
        let file = Path::new("form.html");

        assert_eq!(
            OutputTarget::from_args(file, Some(PathBuf::from("out.html")), false),
            OutputTarget::File(PathBuf::from("out.html"))
        );
        assert_eq!(
            OutputTarget::from_args(file, None, true),
            OutputTarget::File(PathBuf::from("form.html"))
        );
        assert_eq!(OutputTarget::from_args(file, None, false), OutputTarget::Stdout);
    }

    #[test]
    fn can_redact_to_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.html");
        fs::write(&path, HTML).unwrap();

        let mut output = Vec::new();
        redact_to(&path, "form1", &mut output, &RedactorConfig::default()).unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains(r#"<input id="name" value="<DELETED>">"#));
        assert!(result.contains(r#"<input id="other" value="Bob">"#));

        // Input file is left alone when writing elsewhere.
        assert_eq!(fs::read_to_string(&path).unwrap(), HTML);
    }

    #[test]
    fn can_redact_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.html");
        let output_path = dir.path().join("out.html");
        fs::write(&path, HTML).unwrap();

        let target = OutputTarget::from_args(&path, Some(output_path.clone()), false);
        redact(&path, "form1", target, &RedactorConfig::default()).unwrap();

        let result = fs::read_to_string(&output_path).unwrap();
        assert!(result.contains(r#"<input id="name" value="<DELETED>">"#));
        assert_eq!(fs::read_to_string(&path).unwrap(), HTML);
    }

    #[test]
    fn missing_element_writes_nothing_to_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.html");
        fs::write(&path, HTML).unwrap();

        let mut output = Vec::new();
        let err = redact_to(&path, "missing-id", &mut output, &RedactorConfig::default()).unwrap_err();

        assert!(matches!(err.kind, CliErrorKind::NotFound));
        assert!(output.is_empty());
    }
}
