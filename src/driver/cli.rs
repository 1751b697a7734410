//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 学生の自己紹介と階乗を表示するCLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "estudante")]
#[command(about = "Print a student's greeting and a factorial", long_about = None)]
pub struct Args {
    /// Config file path (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Student name
    #[arg(long)]
    pub name: Option<String>,

    /// Student field of study
    #[arg(long)]
    pub field_of_study: Option<String>,

    /// Factorial input
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub number: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["estudante"]);
        assert!(args.config.is_none());
        assert!(args.name.is_none());
        assert!(args.field_of_study.is_none());
        assert!(args.number.is_none());
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["estudante", "-c", "/custom/config.json"]);
        assert_eq!(args.config.as_deref(), Some("/custom/config.json"));
    }

    #[test]
    fn test_args_student_overrides() {
        let args = Args::parse_from([
            "estudante",
            "--name",
            "Rui",
            "--field-of-study",
            "Engenharia Civil",
        ]);
        assert_eq!(args.name.as_deref(), Some("Rui"));
        assert_eq!(args.field_of_study.as_deref(), Some("Engenharia Civil"));
    }

    #[test]
    fn test_args_number() {
        let args = Args::parse_from(["estudante", "-n", "10"]);
        assert_eq!(args.number, Some(10));
    }

    #[test]
    fn test_args_negative_number() {
        let args = Args::parse_from(["estudante", "--number=-3"]);
        assert_eq!(args.number, Some(-3));
    }

    #[test]
    fn test_args_rejects_non_integer() {
        assert!(Args::try_parse_from(["estudante", "-n", "cinco"]).is_err());
    }
}
