use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, InterviewHistoryService, InterviewLoopService};
use storage::repository::Storage;
use ui::vm::DashboardVm;
use ui::{App, UiApp, build_app_context};

mod logging;

const DEFAULT_DB_URL: &str = "sqlite://coach.sqlite3";
const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
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
    display_name: String,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn interview_loop(&self) -> Arc<InterviewLoopService> {
        self.services.interview_loop()
    }

    fn interview_history(&self) -> Arc<InterviewHistoryService> {
        self.services.interview_history()
    }
}

struct Args {
    db_url: String,
    display_name: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--name <display name>]");
    eprintln!("  cargo run -p app -- stats  [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- export [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --name {DEFAULT_DISPLAY_NAME}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COACH_DB_URL, COACH_USER_NAME, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Stats,
    Export,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "stats" => Some(Self::Stats),
            "export" => Some(Self::Export),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut db_url = std::env::var("COACH_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_URL.into()), normalize_sqlite_url);
        let mut display_name = std::env::var("COACH_USER_NAME")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--name" if cmd == Command::Ui => {
                    let value = require_value(args, "--name")?;
                    display_name = value.trim().to_string();
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            db_url,
            display_name,
        }))
    }
}

/// Resolve relative `SQLite` paths against the working directory.
fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
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
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    logging::init_logging();

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    let services = AppServices::from_storage(&storage, Clock::system());
    tracing::info!(db = %parsed.db_url, command = ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                display_name: parsed.display_name,
                services,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Interview Coach")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Stats => {
            let stats = DashboardVm::from(services.interview_history().dashboard_stats().await?);
            println!("Interviews completed: {}", stats.total_interviews);
            println!("Average score:        {}", stats.average_score);
            println!("Best score:           {}", stats.best_score);
            println!("Total practice time:  {}", stats.total_time);
            Ok(())
        }
        Command::Export => {
            let json = services.interview_history().export_json().await?;
            println!("{json}");
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
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

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        tracing::error!(error = %err, "app exited with error");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
