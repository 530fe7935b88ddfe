use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::naming::CommonTokenRule;

/// Word → PDF converter process (`[converter]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Converter executable; invoked as `<program> --headless --convert-to pdf ...`.
    pub program: String,
    /// Kill the converter after this many seconds.
    pub timeout_secs: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "soffice".to_string(),
            timeout_secs: 120,
        }
    }
}

/// PDF merge process (`[merger]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergerConfig {
    /// Merge executable; invoked as `<program> --empty --pages ... -- <output>`.
    pub program: String,
    /// Kill the merger after this many seconds.
    pub timeout_secs: u64,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            program: "qpdf".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Output naming policy (`[naming]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Place uploads with create-new semantics instead of check-then-create.
    #[serde(default)]
    pub exclusive_create: bool,
    /// Use the occurrence-count rule for common words instead of per-file intersection.
    #[serde(default)]
    pub count_occurrences: bool,
}

impl NamingConfig {
    pub fn common_token_rule(&self) -> CommonTokenRule {
        if self.count_occurrences {
            CommonTokenRule::OccurrenceCount
        } else {
            CommonTokenRule::Intersection
        }
    }
}

/// Global configuration loaded from `~/.config/docmerge/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocmergeConfig {
    /// Flat directory holding uploads and merged output.
    pub upload_dir: PathBuf,
    /// Pending-upload state; defaults to `~/.local/state/docmerge/sessions.json`.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
    #[serde(default)]
    pub converter: ConverterConfig,
    #[serde(default)]
    pub merger: MergerConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

impl Default for DocmergeConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploaded_files"),
            session_file: None,
            converter: ConverterConfig::default(),
            merger: MergerConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

impl DocmergeConfig {
    /// Configured session file, or the default one under the XDG state dir.
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session_file {
            Some(p) => Ok(p.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("docmerge")?;
                Ok(xdg_dirs.place_state_file("sessions.json")?)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docmerge")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocmergeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DocmergeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DocmergeConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DocmergeConfig::default();
        assert_eq!(cfg.upload_dir, PathBuf::from("./uploaded_files"));
        assert!(cfg.session_file.is_none());
        assert_eq!(cfg.converter.program, "soffice");
        assert_eq!(cfg.converter.timeout_secs, 120);
        assert_eq!(cfg.merger.program, "qpdf");
        assert_eq!(cfg.merger.timeout_secs, 60);
        assert!(!cfg.naming.exclusive_create);
        assert_eq!(cfg.naming.common_token_rule(), CommonTokenRule::Intersection);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DocmergeConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DocmergeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.upload_dir, cfg.upload_dir);
        assert_eq!(parsed.converter.program, cfg.converter.program);
        assert_eq!(parsed.merger.timeout_secs, cfg.merger.timeout_secs);
    }

    #[test]
    fn config_toml_minimal() {
        let cfg: DocmergeConfig = toml::from_str(r#"upload_dir = "/srv/docmerge""#).unwrap();
        assert_eq!(cfg.upload_dir, PathBuf::from("/srv/docmerge"));
        assert_eq!(cfg.converter.program, "soffice");
        assert_eq!(cfg.merger.program, "qpdf");
        assert!(!cfg.naming.count_occurrences);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            upload_dir = "up"
            session_file = "/tmp/sessions.json"

            [converter]
            program = "/opt/libreoffice/program/soffice"
            timeout_secs = 300

            [merger]
            program = "qpdf"
            timeout_secs = 30

            [naming]
            exclusive_create = true
            count_occurrences = true
        "#;
        let cfg: DocmergeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.session_path().unwrap(), PathBuf::from("/tmp/sessions.json"));
        assert_eq!(cfg.converter.program, "/opt/libreoffice/program/soffice");
        assert_eq!(cfg.converter.timeout_secs, 300);
        assert_eq!(cfg.merger.timeout_secs, 30);
        assert!(cfg.naming.exclusive_create);
        assert_eq!(cfg.naming.common_token_rule(), CommonTokenRule::OccurrenceCount);
    }
}
