use crate::error::{ProcessError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

const PDF_EXTENSION: &str = ".pdf";

/// Identifier derived from a user folder name (`input_42` -> `42`).
///
/// The id ends up inside a directory name, so it may not contain path
/// separators or NUL. Whether the resulting name is usable is checked by
/// [`crate::config::ProcessConfig::output_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId {
    value: String,
    prefixed: bool,
}

impl UserId {
    /// Strips `prefix` from the start of `folder`.
    ///
    /// A folder without the prefix is taken verbatim unless `require_prefix`
    /// is set, in which case it is rejected.
    pub fn from_folder(folder: &str, prefix: &str, require_prefix: bool) -> Result<Self> {
        let (value, prefixed) = match folder.strip_prefix(prefix) {
            Some(rest) if !prefix.is_empty() => (rest, true),
            _ => (folder, false),
        };

        if !prefixed && require_prefix {
            return Err(invalid(folder, format!("expected the '{}' prefix", prefix)));
        }
        validate_component(folder, value)?;

        Ok(Self {
            value: value.to_string(),
            prefixed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the folder carried the expected prefix.
    pub fn was_prefixed(&self) -> bool {
        self.prefixed
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

fn validate_component(folder: &str, value: &str) -> Result<()> {
    if let Some(ch) = value.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(invalid(
            folder,
            format!("user id contains invalid character {:?}", ch),
        ));
    }
    Ok(())
}

fn invalid(folder: &str, reason: impl Into<String>) -> ProcessError {
    ProcessError::InvalidUserFolder {
        folder: folder.to_string(),
        reason: reason.into(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// The input already is a PDF and was copied byte for byte.
    Copied,
    /// The input was not a PDF; a placeholder document was written.
    Placeholder,
}

impl ReportKind {
    /// Decides by file name alone; the input's content is never inspected.
    pub fn detect(input: &Path) -> Self {
        let name = input.as_os_str().to_string_lossy().to_lowercase();
        if name.ends_with(PDF_EXTENSION) {
            ReportKind::Copied
        } else {
            ReportKind::Placeholder
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub input: PathBuf,
    pub user_folder: String,
    /// Name the report after the input (`analysis_report_<stem>.pdf`).
    pub name_from_input: bool,
}

impl ProcessRequest {
    pub fn new(input: impl Into<PathBuf>, user_folder: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            user_folder: user_folder.into(),
            name_from_input: false,
        }
    }

    pub fn with_name_from_input(mut self, enabled: bool) -> Self {
        self.name_from_input = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOutcome {
    pub user_id: UserId,
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: ReportKind,
    pub bytes_written: u64,
}
