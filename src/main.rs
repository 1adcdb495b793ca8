/*!
# journi

Entry point: parses arguments, sets up logging and configuration, then runs
either the interactive menu or a single scripted command.

## Usage

```
journi [OPTIONS] [COMMAND]

Commands:
  read    Print an entry
  append  Append text to an existing entry
  search  Search all entries (case-insensitive)
  stats   Print journal statistics

Options:
      --dir <PATH>             Journal root directory (overrides JOURNI_DIR)
      --inline                 Type entry text in the terminal instead of launching an editor
  -v, --verbose                Print verbose output
      --log-format <FORMAT>    Log output format [default: text] [possible values: text, json]
```

## Configuration

- `JOURNI_EDITOR` or `EDITOR`: editor used to write entry text (inline when unset)
- `JOURNI_DIR`: the journal root (defaults to "~/Documents/journi")
*/

use chrono::{DateTime, Local};
use journi::cli::{CliArgs, ScriptedCommand};
use journi::config::Config;
use journi::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use journi::editor::{Editor, SystemEditor};
use journi::errors::{AppError, AppResult};
use journi::session::render;
use journi::session::{Menu, Prompt, Response};
use journi::JournalStore;
use std::io;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: stderr, `RUST_LOG` aware, text or JSON.
fn init_tracing(args: &CliArgs) {
    let default_level = if args.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if args.wants_json_logs() {
        builder.json().with_current_span(true).init();
    } else {
        builder.init();
    }
}

fn load_config(args: &CliArgs) -> AppResult<Config> {
    let mut config = Config::load()?;
    if let Some(dir) = &args.dir {
        let cwd = std::env::current_dir()?;
        config = config.with_journal_dir(dir, &cwd);
    }
    if args.inline {
        config = config.without_editor();
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Io(io::Error::other(e)))?;
    println!("{}", text);
    Ok(())
}

/// Runs one subcommand and prints its result to stdout.
fn run_scripted(
    scripted: &ScriptedCommand,
    store: &JournalStore,
    now: &DateTime<Local>,
) -> AppResult<()> {
    let command = scripted.to_command(now.date_naive())?;
    let json = scripted.json_output();
    info!(command = command.name(), "Running scripted command");

    match command.execute(store, now)? {
        Response::Entry { content, .. } => println!("{}", content),
        Response::Saved { path } => println!("Saved to: {}", path.display()),
        Response::SearchResults(hits) if json => print_json(&hits)?,
        Response::SearchResults(hits) => {
            if let ScriptedCommand::Search { term, .. } = scripted {
                println!("{}", render::search_results(term, &hits));
            }
        }
        Response::Summary(stats) if json => print_json(&stats)?,
        Response::Summary(stats) => println!("{}", render::summary(&stats)),
        Response::Detailed(stats) if json => print_json(&stats)?,
        Response::Detailed(stats) => println!("{}", render::detailed(&stats)),
        other => debug!(response = ?other, "Nothing to print"),
    }
    Ok(())
}

fn run(args: &CliArgs, now: DateTime<Local>) -> AppResult<()> {
    let config = load_config(args)?;
    debug!(config = ?config, "Configuration loaded");

    let store = JournalStore::new(&config.journal_dir);
    store.ensure_root()?;

    match &args.command {
        Some(scripted) => run_scripted(scripted, &store, &now),
        None => {
            let editor: Option<Box<dyn Editor>> = config.editor.map(|editor_cmd| {
                Box::new(SystemEditor { editor_cmd }) as Box<dyn Editor>
            });
            let stdin = io::stdin();
            let prompt = Prompt::new(stdin.lock(), io::stdout());
            Menu::new(&store, prompt, editor, now).run()
        }
    }
}

fn main() {
    // Obtain current date/time once at the beginning
    let now = Local::now();

    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = tracing::info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    info!("Starting journi");

    if let Err(e) = run(&args, now) {
        error!(error = %e, "Application error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
