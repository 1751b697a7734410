//! # Introduce Student Use Case
//!
//! 学生の自己紹介ユースケース

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::domain::entities::student::Student;
use crate::domain::repositories::output_repository::OutputRepository;

/// 自己紹介ユースケース
///
/// 学生の自己紹介文を生成し、出力リポジトリへ書き出す
pub struct IntroduceStudentUseCase<O: OutputRepository> {
    output_repository: Arc<O>,
}

impl<O: OutputRepository> IntroduceStudentUseCase<O> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `output_repository` - 出力リポジトリ
    pub fn new(output_repository: Arc<O>) -> Self {
        Self { output_repository }
    }

    /// 自己紹介文を出力する
    ///
    /// # Returns
    ///
    /// 出力した自己紹介文
    ///
    /// # Errors
    ///
    /// 出力に失敗した場合にエラーを返す
    pub fn execute(&self, student: &Student) -> Result<String> {
        let greeting = student.greet();
        debug!("Introducing student: {:?}", student);
        self.output_repository.write_line(&greeting)?;
        Ok(greeting)
    }
}
