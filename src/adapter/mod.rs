//! Adapter Layer
//!
//! 外部システム（設定ファイル, 標準出力）との統合

pub mod config;
pub mod repositories;
