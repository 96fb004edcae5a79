use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, DebouncedWriter, SaveOutcome, ScoreService, DEFAULT_DEBOUNCE};
use storage::repository::ScoreStore;
use storage::rest::{RestScoreStore, StoreConfig};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingStoreUrl,
    MissingStoreKey,
    InvalidDebounce { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingStoreUrl => {
                write!(f, "--store-url or SCOREBOARD_STORE_URL is required")
            }
            ArgsError::MissingStoreKey => {
                write!(f, "--store-key or SCOREBOARD_STORE_KEY is required")
            }
            ArgsError::InvalidDebounce { raw } => {
                write!(f, "invalid --debounce-secs value: {raw}")
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
    scores: Arc<ScoreService>,
    save_outcomes: Mutex<Option<UnboundedReceiver<SaveOutcome>>>,
}

impl UiApp for DesktopApp {
    fn scores(&self) -> Arc<ScoreService> {
        Arc::clone(&self.scores)
    }

    fn take_save_outcomes(&self) -> Option<UnboundedReceiver<SaveOutcome>> {
        self.save_outcomes.lock().expect("outcomes lock").take()
    }
}

struct Args {
    store_url: String,
    store_key: String,
    table: String,
    debounce: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--store-url <url>] [--store-key <key>] [--table <name>] [--debounce-secs <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --table users");
    eprintln!("  --debounce-secs 10");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!(
        "  SCOREBOARD_STORE_URL, SCOREBOARD_STORE_KEY, SCOREBOARD_TABLE, SCOREBOARD_DEBOUNCE_SECS"
    );
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut store_url = std::env::var("SCOREBOARD_STORE_URL").ok();
        let mut store_key = std::env::var("SCOREBOARD_STORE_KEY").ok();
        let mut table = std::env::var("SCOREBOARD_TABLE").unwrap_or_else(|_| "users".into());
        let mut debounce = std::env::var("SCOREBOARD_DEBOUNCE_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(DEFAULT_DEBOUNCE, Duration::from_secs);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--store-url" => {
                    store_url = Some(require_value(args, "--store-url")?);
                }
                "--store-key" => {
                    store_key = Some(require_value(args, "--store-key")?);
                }
                "--table" => {
                    table = require_value(args, "--table")?;
                }
                "--debounce-secs" => {
                    let value = require_value(args, "--debounce-secs")?;
                    let secs: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDebounce { raw: value.clone() })?;
                    debounce = Duration::from_secs(secs);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let store_url = store_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ArgsError::MissingStoreUrl)?;
        let store_key = store_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ArgsError::MissingStoreKey)?;

        Ok(Self {
            store_url,
            store_key,
            table,
            debounce,
        })
    }
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let store: Arc<dyn ScoreStore> = Arc::new(RestScoreStore::new(StoreConfig::new(
        parsed.store_url,
        parsed.store_key,
        parsed.table,
    )));
    let (writer, save_outcomes) =
        DebouncedWriter::new(Arc::clone(&store), parsed.debounce, Clock::default_clock());
    let scores = Arc::new(ScoreService::new(store, writer));
    info!(debounce_secs = parsed.debounce.as_secs(), "starting scoreboard");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        scores,
        save_outcomes: Mutex::new(Some(save_outcomes)),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Scoreboard")
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
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
