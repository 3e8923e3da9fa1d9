use std::borrow::Cow;

use redactor::RedactorError;

#[derive(Debug)]
pub enum CliErrorKind {
    Config,
    NotFound,
    Other,
}

impl CliErrorKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config => 2,
            Self::NotFound => 3,
            Self::Other => 101,
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub kind: CliErrorKind,
    pub description: Cow<'static, str>,
}

impl CliError {
    pub fn new<S: Into<Cow<'static, str>>>(kind: CliErrorKind, description: S) -> CliError {
        CliError {
            kind,
            description: description.into(),
        }
    }
}

impl From<RedactorError> for CliError {
    fn from(error: RedactorError) -> Self {
        match error {
            RedactorError::NotFound { id } => {
                CliError::new(CliErrorKind::NotFound, format!("No element with id '{id}' was found"))
            }
            RedactorError::ReadConfig(err) => {
                CliError::new(CliErrorKind::Config, format!("Error reading config file: {err}"))
            }
            RedactorError::ParseConfig(err) => {
                CliError::new(CliErrorKind::Config, format!("Error parsing configuration: {err}"))
            }
            RedactorError::Config(err) => CliError::new(CliErrorKind::Config, format!("Configuration error: {err}")),
            RedactorError::OpenFile(err) => CliError::new(CliErrorKind::Config, format!("Error opening file: {err}")),
            RedactorError::CreateFile(err) => {
                CliError::new(CliErrorKind::Config, format!("Error creating file: {err}"))
            }
            RedactorError::ReadFile(err) => CliError::new(CliErrorKind::Config, format!("Error reading file: {err}")),
            RedactorError::WriteFile(err) => CliError::new(CliErrorKind::Config, format!("Error writing file: {err}")),
            RedactorError::Serialize(err) => {
                CliError::new(CliErrorKind::Other, format!("Error serializing HTML: {err}"))
            }
            RedactorError::Other(err) => CliError::new(CliErrorKind::Other, err.to_string()),
        }
    }
}
