//! # Student Value Object
//!
//! 自己紹介を行う学生のバリューオブジェクト

use serde::{Deserialize, Serialize};
use std::fmt;

/// 既定の学生名
pub const DEFAULT_STUDENT_NAME: &str = "Ana";
/// 既定の専攻
pub const DEFAULT_FIELD_OF_STUDY: &str = "Engenharia Informática";

/// 学生
///
/// 名前と専攻を保持する不変の値。入力は検証も正規化もせず、そのまま保存する。
/// 設定ファイルではキーを省略すると既定値になる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    name: String,
    field_of_study: String,
}

impl Student {
    /// 新しい学生を作成
    ///
    /// # Arguments
    ///
    /// * `name` - 名前（空文字列も可）
    /// * `field_of_study` - 専攻（空文字列も可）
    pub fn new(name: impl Into<String>, field_of_study: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_of_study: field_of_study.into(),
        }
    }

    /// 名前を返す
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 専攻を返す
    #[inline]
    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    /// 自己紹介文を返す
    ///
    /// 形式は常に `Sou {name} e estudo {field_of_study}.`
    pub fn greet(&self) -> String {
        self.to_string()
    }
}

impl Default for Student {
    fn default() -> Self {
        Self::new(DEFAULT_STUDENT_NAME, DEFAULT_FIELD_OF_STUDY)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sou {} e estudo {}.", self.name, self.field_of_study)
    }
}
