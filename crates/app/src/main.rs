use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{DEFAULT_TIME_LIMIT_SECS, QuestionBank, QuizConfig};
use ui::{App, UiApp, build_app_context};

mod bank;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeLimit { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeLimit { raw } => {
                write!(f, "invalid --time-limit value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn quiz_config(&self) -> QuizConfig {
        self.config
    }
}

#[derive(Debug)]
struct Args {
    bank_path: Option<PathBuf>,
    time_limit_secs: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <json_file>] [--time-limit <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank        (embedded seven-question bank)");
    eprintln!("  --time-limit  {DEFAULT_TIME_LIMIT_SECS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK, QUIZ_TIME_LIMIT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut bank_path = std::env::var("QUIZ_BANK").ok().map(PathBuf::from);
        let mut time_limit_secs = std::env::var("QUIZ_TIME_LIMIT")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_TIME_LIMIT_SECS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    bank_path = Some(PathBuf::from(value));
                }
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    time_limit_secs = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTimeLimit { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            bank_path,
            time_limit_secs,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Load + validate the bank before any window exists, so a bad file
    // fails fast with a readable error.
    let bank = match parsed.bank_path.as_deref() {
        Some(path) => {
            log::info!("loading question bank from {}", path.display());
            bank::load_from_path(path)?
        }
        None => bank::default_bank(),
    };
    let config = QuizConfig::new(parsed.time_limit_secs)?;
    log::info!(
        "starting quiz: {} questions, {}s per question",
        bank.len(),
        config.time_limit_secs()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: Arc::new(bank),
        config,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Challenge")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter)
    }

    #[test]
    fn parses_time_limit_flag() {
        let args = parse(&["--time-limit", "30"]).unwrap();
        assert_eq!(args.time_limit_secs, 30);
    }

    #[test]
    fn parses_bank_flag() {
        let args = parse(&["--bank", "questions.json"]).unwrap();
        assert_eq!(args.bank_path, Some(PathBuf::from("questions.json")));
    }

    #[test]
    fn rejects_unparseable_time_limit() {
        let err = parse(&["--time-limit", "soon"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidTimeLimit { .. }));
    }

    #[test]
    fn rejects_flag_without_value() {
        let err = parse(&["--bank"]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--bank" }));
    }

    #[test]
    fn rejects_unknown_argument() {
        let err = parse(&["--decks"]).unwrap_err();
        assert!(matches!(err, ArgsError::UnknownArg(_)));
    }
}
