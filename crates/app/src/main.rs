use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::catalog::load_questions;
use services::{DataUrlDecoder, FileDecoder, Narrator, SilentNarrator};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, WebSpeechNarrator, build_app_context};
use woodland_core::SlideshowTiming;
use woodland_core::catalog::{default_questions, default_slides};
use woodland_core::model::{Question, Slide};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => {
                write!(f, "invalid {flag} value: {raw} (expected a positive number)")
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

fn parse_number(flag: &'static str, raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    questions: Vec<Question>,
    slides: Vec<Slide>,
    speech: bool,
    timing: SlideshowTiming,
}

impl UiApp for DesktopApp {
    fn quiz_questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn tour_slides(&self) -> Vec<Slide> {
        self.slides.clone()
    }

    fn narrator(&self) -> Arc<dyn Narrator> {
        if self.speech {
            Arc::new(WebSpeechNarrator)
        } else {
            Arc::new(SilentNarrator)
        }
    }

    fn decoder(&self) -> Arc<dyn FileDecoder> {
        Arc::new(DataUrlDecoder::default())
    }

    fn timing(&self) -> SlideshowTiming {
        self.timing
    }

    fn checks_speech_support(&self) -> bool {
        self.speech
    }
}

struct Args {
    quiz_path: Option<PathBuf>,
    advance_secs: u64,
    fade_ms: u64,
    speech: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--quiz <path>] [--advance-secs <n>] [--fade-ms <n>] [--no-speech]");
    eprintln!("  cargo run -p app -- check [--quiz <path>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  built-in woodland quiz");
    eprintln!("  --advance-secs 10");
    eprintln!("  --fade-ms 300");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WOODLAND_QUIZ_PATH, WOODLAND_ADVANCE_SECS, WOODLAND_FADE_MS, WOODLAND_SPEECH=off");
    eprintln!("  RUST_LOG (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut quiz_path = std::env::var_os("WOODLAND_QUIZ_PATH").map(PathBuf::from);
        let mut advance_secs = match std::env::var("WOODLAND_ADVANCE_SECS") {
            Ok(raw) => parse_number("WOODLAND_ADVANCE_SECS", raw)?,
            Err(_) => 10,
        };
        let mut fade_ms = match std::env::var("WOODLAND_FADE_MS") {
            Ok(raw) => parse_number("WOODLAND_FADE_MS", raw)?,
            Err(_) => 300,
        };
        let mut speech = !std::env::var("WOODLAND_SPEECH")
            .is_ok_and(|value| value.eq_ignore_ascii_case("off"));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz" => {
                    quiz_path = Some(PathBuf::from(require_value(args, "--quiz")?));
                }
                "--advance-secs" => {
                    let value = require_value(args, "--advance-secs")?;
                    advance_secs = parse_number("--advance-secs", value)?;
                }
                "--fade-ms" => {
                    let value = require_value(args, "--fade-ms")?;
                    fade_ms = parse_number("--fade-ms", value)?;
                }
                "--no-speech" => speech = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if advance_secs == 0 {
            return Err(ArgsError::InvalidNumber {
                flag: "--advance-secs",
                raw: advance_secs.to_string(),
            });
        }

        Ok(Self {
            quiz_path,
            advance_secs,
            fade_ms,
            speech,
        })
    }

    fn timing(&self) -> Result<SlideshowTiming, woodland_core::Error> {
        Ok(SlideshowTiming::new(
            Duration::from_secs(self.advance_secs),
            Duration::from_millis(self.fade_ms),
        )?)
    }

    fn questions(&self) -> Result<Vec<Question>, services::CatalogError> {
        match &self.quiz_path {
            Some(path) => {
                let questions = load_questions(path)?;
                info!(path = %path.display(), count = questions.len(), "loaded quiz file");
                Ok(questions)
            }
            None => Ok(default_questions()),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    let questions = parsed.questions()?;

    match cmd {
        Command::Ui => {
            let app = DesktopApp {
                questions,
                slides: default_slides(),
                speech: parsed.speech,
                timing: parsed.timing()?,
            };
            info!(
                questions = app.questions.len(),
                slides = app.slides.len(),
                speech = app.speech,
                "launching woodland guide"
            );

            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Woodland Guide")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            println!("quiz ok: {} questions", questions.len());
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
