//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::application::dto::program_config::ProgramConfig;
use crate::application::use_cases::compute_factorial::ComputeFactorialUseCase;
use crate::application::use_cases::introduce_student::IntroduceStudentUseCase;
use crate::domain::entities::student::Student;
use crate::domain::repositories::output_repository::OutputRepository;

use super::cli::Args;

/// Merge CLI overrides over the loaded configuration
/// Precedence: CLI flag > config file > built-in default
pub fn resolve_program_config(args: &Args, config: &Config) -> ProgramConfig {
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| config.student.name().to_string());
    let field_of_study = args
        .field_of_study
        .clone()
        .unwrap_or_else(|| config.student.field_of_study().to_string());
    let factorial_input = args.number.unwrap_or(config.factorial_input);

    ProgramConfig::new(Student::new(name, field_of_study), factorial_input)
}

/// Presentation Workflow
pub struct PresentationWorkflow<O: OutputRepository> {
    config: ProgramConfig,
    introduce_use_case: IntroduceStudentUseCase<O>,
    factorial_use_case: ComputeFactorialUseCase<O>,
}

impl<O: OutputRepository> PresentationWorkflow<O> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: ProgramConfig, output_repository: Arc<O>) -> Self {
        let introduce_use_case = IntroduceStudentUseCase::new(output_repository.clone());
        let factorial_use_case = ComputeFactorialUseCase::new(output_repository);

        Self {
            config,
            introduce_use_case,
            factorial_use_case,
        }
    }

    /// Execute the workflow: greeting first, then the factorial
    pub fn execute(&self) -> Result<()> {
        info!("Starting presentation workflow...");

        let greeting = self.introduce_use_case.execute(&self.config.student)?;
        info!("Greeting written ({} bytes)", greeting.len());

        let value = self
            .factorial_use_case
            .execute(self.config.factorial_input)?;
        info!("Factorial of {} written: {}", self.config.factorial_input, value);

        Ok(())
    }
}
