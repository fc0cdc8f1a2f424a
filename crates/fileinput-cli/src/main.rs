//! fileinput CLI: story harness and validator for the file input widget

use clap::{Parser, Subcommand};
use fileinput_core::{
    current_button_label, current_hint, display_text, select_file, SelectedFile, SelectionState,
    Story, Validity, WidgetConfig,
};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// File input widget story and validator
#[derive(Parser)]
#[command(name = "fileinput")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the story TUI (default when no command specified)
    Story {
        /// Widget config JSON (default: the built-in story props)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Validate a file against a widget config
    Check {
        /// File to validate
        file: PathBuf,

        /// Widget config JSON (default: the built-in story props)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the route table
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in story config as JSON
    Config,
}

/// Exit code of `check` when the file fails validation.
const EXIT_INVALID: i32 = 2;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => cmd_story(None, None),
        Some(Commands::Story { config, log_file }) => {
            cmd_story(config.as_deref(), log_file.as_deref());
        }
        Some(Commands::Check { file, config, json }) => {
            init_stderr_logging();
            cmd_check(&file, config.as_deref(), json);
        }
        Some(Commands::Routes { json }) => {
            init_stderr_logging();
            cmd_routes(json);
        }
        Some(Commands::Config) => cmd_config(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs only go to a file when asked for.
fn init_file_logging(path: &Path) {
    match File::create(path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => {
            eprintln!("Failed to open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> WidgetConfig {
    let Some(path) = path else {
        return Story::default().config;
    };
    match WidgetConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn cmd_story(config: Option<&Path>, log_file: Option<&Path>) {
    if let Some(path) = log_file {
        init_file_logging(path);
    }

    let story = Story {
        config: load_config(config),
        ..Story::default()
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = rt.block_on(fileinput_tui::run_tui(story)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Result of `check`, as printed with `--json`.
#[derive(Serialize)]
struct CheckReport<'a> {
    file: &'a SelectedFile,
    validity: Validity,
    button_label: &'a str,
    hint: &'a str,
    display_text: &'a str,
}

impl CheckReport<'_> {
    /// Plain-text form printed without `--json`.
    fn to_text(&self) -> String {
        format!(
            "File:     {} ({}, {})\nDisplay:  {}\nValidity: {}\nButton:   {}\nHint:     {}",
            self.file.name,
            self.file.mime_type,
            self.file.human_size(),
            self.display_text,
            self.validity,
            self.button_label,
            self.hint,
        )
    }
}

fn cmd_check(path: &Path, config_path: Option<&Path>, json: bool) {
    let config = load_config(config_path);

    let file = match SelectedFile::from_path(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    if config.disabled {
        eprintln!("Widget is disabled; selection is ignored");
    }

    let state = select_file(&SelectionState::new(), file.clone(), &config);
    let report = CheckReport {
        file: &file,
        validity: state.validity(),
        button_label: current_button_label(&state, &config),
        hint: current_hint(&state, &config),
        display_text: display_text(&state, &config),
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report.to_text());
    }

    if report.validity != Validity::Valid {
        std::process::exit(EXIT_INVALID);
    }
}

/// One route as printed by `routes`.
#[derive(Serialize)]
struct RouteRow<'a> {
    path: &'a str,
    name: &'a str,
    layout: &'a str,
}

fn cmd_routes(json: bool) {
    let routes = fileinput_tui::default_routes();
    let rows: Vec<RouteRow<'_>> = routes
        .iter()
        .map(|r| RouteRow {
            path: &r.path,
            name: &r.name,
            layout: &r.meta.layout,
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Failed to serialize routes: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("{:<12} {:<12} LAYOUT", "PATH", "NAME");
    for row in &rows {
        println!("{:<12} {:<12} {}", row.path, row.name, row.layout);
    }
}

fn cmd_config() {
    match Story::default().config.to_json_pretty() {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
