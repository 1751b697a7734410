//! # Estudante
//!
//! 学生の自己紹介と階乗計算を行う小さなCLI
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: Student エンティティと階乗サービス（外部依存なし）
//! - **Application層**: 自己紹介・階乗出力のユースケース
//! - **Adapter層**: 設定ファイルと標準出力
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
