use crate::error::{ProcessError, Result};
use crate::model::UserId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIRNAME: &str = ".process_doc";
const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_OUTPUT_ROOT: &str = "public";
const DEFAULT_INPUT_PREFIX: &str = "input_";
const DEFAULT_OUTPUT_PREFIX: &str = "output_";
const DEFAULT_REPORT_FILE_NAME: &str = "analysis_report.pdf";

/// Output layout settings, stored in .process_doc/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Directory under which per-user output folders are created
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Prefix stripped from the user folder to obtain the user id
    #[serde(default = "default_input_prefix")]
    pub input_prefix: String,

    /// Prefix of the per-user output folder (`output_<id>`)
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,

    /// Reject user folders that lack `input_prefix`
    #[serde(default)]
    pub require_prefix: bool,
}

fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

fn default_input_prefix() -> String {
    DEFAULT_INPUT_PREFIX.to_string()
}

fn default_output_prefix() -> String {
    DEFAULT_OUTPUT_PREFIX.to_string()
}

fn default_report_file_name() -> String {
    DEFAULT_REPORT_FILE_NAME.to_string()
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            input_prefix: default_input_prefix(),
            output_prefix: default_output_prefix(),
            report_file_name: default_report_file_name(),
            require_prefix: false,
        }
    }
}

impl ProcessConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ProcessError::Io)?;
        let config: ProcessConfig =
            serde_json::from_str(&content).map_err(ProcessError::Serialization)?;
        Ok(config)
    }

    /// `<output_root>/<output_prefix><id>`
    ///
    /// The joined name must be a real directory name: `output_` and
    /// `output_..` are fine, while an empty prefix with an empty, `.` or `..`
    /// id is rejected.
    pub fn output_dir(&self, user_id: &UserId) -> Result<PathBuf> {
        let name = format!("{}{}", self.output_prefix, user_id.as_str());
        if name.is_empty() || name == "." || name == ".." {
            return Err(ProcessError::InvalidUserFolder {
                folder: user_id.to_string(),
                reason: format!("output directory name '{}' is not a directory name", name),
            });
        }
        Ok(self.output_root.join(name))
    }

    /// The report file name, optionally suffixed with the input's stem
    /// (`analysis_report_<stem>.pdf`).
    pub fn report_file_name_for(&self, input_stem: Option<&str>) -> String {
        match input_stem {
            Some(stem) if !stem.is_empty() => {
                let base = Path::new(&self.report_file_name);
                let report_stem = base
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match base.extension() {
                    Some(ext) => format!("{}_{}.{}", report_stem, stem, ext.to_string_lossy()),
                    None => format!("{}_{}", report_stem, stem),
                }
            }
            _ => self.report_file_name.clone(),
        }
    }
}
