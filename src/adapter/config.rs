//! Configuration File
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::application::dto::program_config::{ProgramConfig, DEFAULT_FACTORIAL_INPUT};
use crate::domain::entities::student::Student;

/// 設定ファイル
///
/// 全てのキーは省略可能で、省略時は既定値を使う
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub student: Student,
    pub factorial_input: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            student: Student::default(),
            factorial_input: DEFAULT_FACTORIAL_INPUT,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path))?;
        info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// パスが指定されていれば読み込み、なければ既定値を返す
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Application層のDTOへ変換
    pub fn to_program_config(&self) -> ProgramConfig {
        ProgramConfig::new(self.student.clone(), self.factorial_input)
    }
}
