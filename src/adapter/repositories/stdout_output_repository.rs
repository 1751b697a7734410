//! Stdout Output Repository Implementation
//!
//! OutputRepositoryの標準出力実装

use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::domain::repositories::output_repository::OutputRepository;

/// 標準出力への出力リポジトリ
pub struct StdoutOutputRepository;

impl StdoutOutputRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutOutputRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRepository for StdoutOutputRepository {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line).context("Failed to write to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_succeeds() {
        let repo = StdoutOutputRepository::new();
        assert!(repo.write_line("stdout repository test").is_ok());
    }
}
