//! # Output Repository Trait
//!
//! ユースケースの出力先を抽象化

use anyhow::Result;

/// 出力リポジトリ
///
/// ユースケースが生成した行を外部へ書き出す。
/// 一行ごとに呼ばれ、改行は実装側が付与する。
pub trait OutputRepository: Send + Sync {
    /// 一行を書き出す
    ///
    /// # Arguments
    ///
    /// * `line` - 改行を含まない出力行
    fn write_line(&self, line: &str) -> Result<()>;
}
