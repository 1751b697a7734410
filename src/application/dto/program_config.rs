//! # Program Configuration DTO
//!
//! 実行設定のData Transfer Object

use crate::domain::entities::student::Student;

/// 既定の階乗入力
pub const DEFAULT_FACTORIAL_INPUT: i64 = 5;

/// 実行設定
///
/// ワークフローが一回の実行で使う値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    /// 自己紹介する学生
    pub student: Student,
    /// 階乗の入力値
    pub factorial_input: i64,
}

impl ProgramConfig {
    /// 新しい実行設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use estudante::application::dto::program_config::ProgramConfig;
    /// use estudante::domain::entities::student::Student;
    ///
    /// let config = ProgramConfig::new(Student::new("Rui", "Matemática"), 7);
    ///
    /// assert_eq!(config.student.name(), "Rui");
    /// assert_eq!(config.factorial_input, 7);
    /// ```
    pub fn new(student: Student, factorial_input: i64) -> Self {
        Self {
            student,
            factorial_input,
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self::new(Student::default(), DEFAULT_FACTORIAL_INPUT)
    }
}
