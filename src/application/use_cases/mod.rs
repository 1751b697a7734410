//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **IntroduceStudentUseCase**: 学生の自己紹介を出力
//! - **ComputeFactorialUseCase**: 階乗を計算して出力

pub mod compute_factorial;
pub mod introduce_student;
