use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use burson_core::model::QuestionBank;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, GameServices};
use storage::repository::SaveSlot;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://burson.sqlite3";
const MEMORY_DB_URL: &str = "sqlite::memory:";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSlot { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSlot { raw } => write!(f, "invalid --slot value: {raw:?}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    services: GameServices,
    audio_enabled: bool,
}

impl UiApp for DesktopApp {
    fn game_services(&self) -> GameServices {
        self.services.clone()
    }

    fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    slot: SaveSlot,
    questions: Option<PathBuf>,
    mute: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--slot <name>]");
    eprintln!("                      [--questions <path>] [--mute]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --slot default");
    eprintln!("  --questions <built-in BURSON bank>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BURSON_DB_URL, BURSON_SAVE_SLOT, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Invocation, ArgsError> {
        let mut db_url = env("BURSON_DB_URL")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut slot = match env("BURSON_SAVE_SLOT") {
            Some(raw) => parse_slot(raw)?,
            None => SaveSlot::default(),
        };
        let mut questions = None;
        let mut mute = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--slot" => {
                    slot = parse_slot(require_value(args, "--slot")?)?;
                }
                "--questions" => {
                    questions = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--mute" => mute = true,
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Run(Self {
            db_url,
            slot,
            questions,
            mute,
        }))
    }
}

fn parse_slot(raw: String) -> Result<SaveSlot, ArgsError> {
    SaveSlot::new(raw.as_str()).map_err(|_| ArgsError::InvalidSlot { raw })
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == MEMORY_DB_URL || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == MEMORY_DB_URL {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_bank(path: Option<&PathBuf>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuestionBank::standard());
    };
    let text = std::fs::read_to_string(path)?;
    let bank = QuestionBank::from_json(&text)?;
    tracing::info!(path = %path.display(), word = %bank.word(), "loaded question bank");
    Ok(bank)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

async fn open_services(
    args: &Args,
    clock: Clock,
    bank: QuestionBank,
) -> Result<GameServices, Box<dyn std::error::Error>> {
    if args.db_url == MEMORY_DB_URL {
        return Ok(GameServices::in_memory_with_slot(clock, bank, args.slot.clone()));
    }
    prepare_sqlite_file(&args.db_url)?;
    let services = GameServices::new_sqlite(&args.db_url, clock, bank, args.slot.clone()).await?;
    Ok(services)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            return Err(e.into());
        }
    };

    init_tracing();

    let bank = load_bank(parsed.questions.as_ref())?;
    let clock = Clock::system();

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    let services = open_services(&parsed, clock, bank).await?;
    tracing::info!(
        db = %parsed.db_url,
        slot = %services.saved_games().slot(),
        mute = parsed.mute,
        "starting Burson Gaming"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        audio_enabled: !parsed.mute,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Burson Gaming")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
