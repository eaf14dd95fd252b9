//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/reportdoc/reportdoc.toml`
//! 3. Local config: `<project_dir>/.reportdoc.toml`
//! 4. Environment variables: `REPORTDOC_*` prefix
//!
//! The `--output` CLI flag is applied on top by the command layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::report::TitlePage;
use crate::application::ApplicationError;
use crate::util::path::expand_env_vars;

/// Default report file name, relative to the project directory.
pub const DEFAULT_OUTPUT: &str = "Internal_Assessment_Attendance_Report.docx";

/// Raw title page for intermediate parsing (`None` → inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawTitlePage {
    pub author: Option<String>,
    pub register_number: Option<String>,
    pub guide: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub degree: Option<String>,
    pub department: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub output: Option<PathBuf>,
    pub title_page: RawTitlePage,
}

fn overlay(base: &str, value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| base.to_string())
}

impl RawTitlePage {
    /// Merge onto `base`: specified fields win, others keep the base value.
    pub fn apply_to(&self, base: &TitlePage) -> TitlePage {
        TitlePage {
            author: overlay(&base.author, &self.author),
            register_number: overlay(&base.register_number, &self.register_number),
            guide: overlay(&base.guide, &self.guide),
            institution: overlay(&base.institution, &self.institution),
            year: overlay(&base.year, &self.year),
            degree: overlay(&base.degree, &self.degree),
            department: overlay(&base.department, &self.department),
        }
    }
}

/// Unified configuration for reportdoc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output `.docx` path (relative paths resolve against the project directory)
    pub output: PathBuf,
    /// Title page values
    pub title_page: TitlePage,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title_page: TitlePage::default(),
        }
    }
}

/// Get the XDG config directory for reportdoc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "reportdoc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("reportdoc.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".reportdoc.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in the output path.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.output.to_string_lossy().as_ref());
        self.output = PathBuf::from(expanded);
    }

    /// Merge overlay config onto self (base). Scalars: overlay wins if specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            output: overlay.output.clone().unwrap_or_else(|| self.output.clone()),
            title_page: overlay.title_page.apply_to(&self.title_page),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory holding `.reportdoc.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply REPORTDOC_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("REPORTDOC")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("output") {
            settings.output = PathBuf::from(val);
        }

        let t = &mut settings.title_page;
        for (key, field) in [
            ("title_page.author", &mut t.author),
            ("title_page.register_number", &mut t.register_number),
            ("title_page.guide", &mut t.guide),
            ("title_page.institution", &mut t.institution),
            ("title_page.year", &mut t.year),
            ("title_page.degree", &mut t.degree),
            ("title_page.department", &mut t.department),
        ] {
            if let Ok(val) = config.get_string(key) {
                *field = val;
            }
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# reportdoc configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/reportdoc/reportdoc.toml
#   Local:  <project_dir>/.reportdoc.toml
#   Env:    REPORTDOC_* environment variables
#           (e.g. REPORTDOC_OUTPUT, REPORTDOC_TITLE_PAGE__AUTHOR)
#   CLI:    reportdoc build --output <path>

# Output file (relative paths resolve against the project directory)
# output = "Internal_Assessment_Attendance_Report.docx"

[title_page]
# author = "[Your Name]"
# register_number = "[Your Register Number]"
# guide = "[Guide Name]"
# institution = "[Institution Name]"
# year = "[Year]"
# degree = "Master of Computer Applications (MCA)"
# department = "Department of Computer Applications"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_output_is_report_file_name() {
        let settings = Settings::default();
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.title_page, TitlePage::default());
    }

    #[test]
    fn given_tilde_in_output_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            output: PathBuf::from("~/reports/out.docx"),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let output = settings.output.to_string_lossy();
        assert!(
            output.starts_with(&home),
            "output should start with home dir: {}",
            output
        );
        assert!(!output.contains('~'), "output should not contain tilde");
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unset_fields_keep_base() {
        let base = Settings::default();
        let overlay = RawSettings {
            output: None,
            title_page: RawTitlePage {
                author: Some("Asha Rao".into()),
                year: Some("2024".into()),
                ..RawTitlePage::default()
            },
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.output, base.output);
        assert_eq!(result.title_page.author, "Asha Rao");
        assert_eq!(result.title_page.year, "2024");
        assert_eq!(result.title_page.guide, "[Guide Name]");
        assert_eq!(
            result.title_page.degree,
            "Master of Computer Applications (MCA)"
        );
    }

    #[test]
    fn given_overlay_output_when_merging_then_replaces_output() {
        let overlay = RawSettings {
            output: Some(PathBuf::from("out/report.docx")),
            ..RawSettings::default()
        };

        let result = Settings::default().merge_with(&overlay);

        assert_eq!(result.output, PathBuf::from("out/report.docx"));
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml_with_no_overrides() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.output.is_none());
        assert!(raw.title_page.author.is_none());
    }

    #[test]
    fn given_settings_when_to_toml_then_round_trips() {
        let settings = Settings::default();
        let text = settings.to_toml().expect("serialize");
        let parsed: Settings = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, settings);
    }
}
