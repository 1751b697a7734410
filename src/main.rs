//! Estudante - Student Greeting & Factorial
//!
//! 学生の自己紹介と階乗を標準出力に表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use estudante::adapter::config::Config;
use estudante::adapter::repositories::stdout_output_repository::StdoutOutputRepository;
use estudante::driver::workflow::resolve_program_config;
use estudante::driver::{Args, PresentationWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let config = Config::load_or_default(args.config.as_deref())?;
    let program_config = resolve_program_config(&args, &config);

    // Create workflow with injected dependencies
    let output_repository = Arc::new(StdoutOutputRepository::new());
    let workflow = PresentationWorkflow::new(program_config, output_repository);

    workflow.execute()
}
