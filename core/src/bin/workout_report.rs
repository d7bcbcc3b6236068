//! Workout report - prints training summaries for sensor packages.
//!
//! Run with:
//! ```text
//! cargo run --bin workout-report
//! cargo run --bin workout-report -- --input packages.txt --keep-going
//! ```

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use workout_compute::{
    parse_packages, run_batch, BatchPolicy, Language, OutputFormat, ReportOptions, Settings,
    WalkingDivision, WorkoutCode, WorkoutPackage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DivisionArg {
    Floor,
    True,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

/// Compute distance, speed and calories for workout sensor packages
#[derive(Parser, Debug)]
#[command(name = "workout-report")]
#[command(version)]
#[command(about = "Compute distance, speed and calories for workout sensor packages")]
pub struct Args {
    /// Package file, one `CODE v1 v2 ...` per line ("-" reads stdin).
    /// Without it the built-in reference packages are processed.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Division used by the sports-walking calorie formula
    #[arg(long, value_enum, default_value_t = DivisionArg::Floor)]
    pub walking_division: DivisionArg,

    /// Language of summary lines
    #[arg(long, value_enum, default_value_t = LanguageArg::En)]
    pub language: LanguageArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Skip failing packages instead of stopping at the first one
    #[arg(short, long)]
    pub keep_going: bool,

    /// List the known workout codes and their fields, then exit
    #[arg(long)]
    pub list_types: bool,
}

impl Args {
    fn report_options(&self) -> ReportOptions {
        let walking_division = match self.walking_division {
            DivisionArg::Floor => WalkingDivision::Floor,
            DivisionArg::True => WalkingDivision::True,
        };
        let language = match self.language {
            LanguageArg::En => Language::English,
            LanguageArg::Ru => Language::Russian,
        };
        ReportOptions {
            settings: Settings {
                walking_division,
                language,
            },
            format: match self.format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            },
            policy: if self.keep_going {
                BatchPolicy::Skip
            } else {
                BatchPolicy::Abort
            },
        }
    }
}

fn load_packages(input: Option<&PathBuf>) -> anyhow::Result<Vec<WorkoutPackage>> {
    let Some(path) = input else {
        return Ok(workout_compute::default_packages());
    };

    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read packages from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read packages from {}", path.display()))?
    };

    Ok(parse_packages(&text)?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries only summaries; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if args.list_types {
        for code in WorkoutCode::ALL {
            println!(
                "{} {}: {}",
                code.as_str(),
                code.training_type(),
                code.expected_fields().join(", ")
            );
        }
        return Ok(());
    }

    let options = args.report_options();
    info!(?options, "configuration resolved");

    let packages = load_packages(args.input.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&packages, &options, &mut out)?;

    if !report.is_complete() {
        for failure in &report.failures {
            eprintln!(
                "package {} ({}): {}",
                failure.index + 1,
                failure.workout_type,
                failure.error
            );
        }
        bail!(
            "{} of {} packages failed",
            report.failures.len(),
            packages.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["workout-report"]);
        assert_eq!(args.input, None);
        assert_eq!(args.walking_division, DivisionArg::Floor);
        assert_eq!(args.language, LanguageArg::En);
        assert_eq!(args.format, FormatArg::Text);
        assert!(!args.keep_going);
        assert!(!args.list_types);
        assert_eq!(args.report_options(), ReportOptions::default());
    }

    #[test]
    fn test_options_from_flags() {
        let args = Args::parse_from([
            "workout-report",
            "--walking-division",
            "true",
            "--language",
            "ru",
            "--format",
            "json",
            "-k",
        ]);
        let options = args.report_options();
        assert_eq!(options.settings.walking_division, WalkingDivision::True);
        assert_eq!(options.settings.language, Language::Russian);
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.policy, BatchPolicy::Skip);
    }

    #[test]
    fn test_input_path() {
        let args = Args::parse_from(["workout-report", "--input", "packages.txt"]);
        assert_eq!(args.input, Some(PathBuf::from("packages.txt")));
    }

    #[test]
    fn test_rejects_unknown_language() {
        let result = Args::try_parse_from(["workout-report", "--language", "de"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["workout-report", "--help"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn test_load_default_packages() {
        let packages = load_packages(None).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].workout_type, "SWM");
    }

    #[test]
    fn test_load_packages_from_file() {
        let path = std::env::temp_dir().join(format!(
            "workout_report_test_packages_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "RUN 15000 1 75\nWLK 9000 1 75 180\n").unwrap();
        let packages = load_packages(Some(&path)).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].workout_type, "WLK");
    }

    #[test]
    fn test_load_packages_missing_file() {
        let path = PathBuf::from("/nonexistent/workout_packages.txt");
        assert!(load_packages(Some(&path)).is_err());
    }
}
