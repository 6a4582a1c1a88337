//! 設定ファイル（kifu.toml）

use std::path::Path;

use anyhow::{Context, Result};
use kifu_core::KifOptions;
use kifu_core::kif::DEFAULT_HEADER_COMMENT;
use serde::Deserialize;

/// `--config` 未指定時に探すファイル名（カレントディレクトリ）
pub const DEFAULT_CONFIG_FILE: &str = "kifu.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub kif: KifSection,
}

/// `[kif]` セクション
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct KifSection {
    pub header_comment: String,
    pub seconds_per_move: u32,
}

impl Default for KifSection {
    fn default() -> Self {
        Self {
            header_comment: DEFAULT_HEADER_COMMENT.to_string(),
            seconds_per_move: 1,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// 設定を読む
    ///
    /// `path` 指定時はそのファイルが必須。未指定なら `kifu.toml` があれば読み、
    /// なければ既定値。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    log::debug!("no {DEFAULT_CONFIG_FILE}; using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&data)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn kif_options(&self) -> KifOptions {
        KifOptions {
            header_comment: self.kif.header_comment.clone(),
            seconds_per_move: self.kif.seconds_per_move,
            ended_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.kif_options(), KifOptions::default());
    }

    #[test]
    fn test_partial_section() {
        let config = Config::from_toml_str("[kif]\nseconds_per_move = 3\n").unwrap();
        let opts = config.kif_options();
        assert_eq!(opts.seconds_per_move, 3);
        assert_eq!(opts.header_comment, DEFAULT_HEADER_COMMENT);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::from_toml_str("[kif]\nsecond_per_move = 3\n").is_err());
        assert!(Config::from_toml_str("[render]\n").is_err());
    }
}
