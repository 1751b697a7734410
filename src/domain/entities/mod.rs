//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Student**: 自己紹介を行う学生のバリューオブジェクト

pub mod student;
