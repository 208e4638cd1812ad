//! almanac CLI - ask the Solar Almanac
//!
//! Interactive prompt by default; one-shot questions, planet listing and a
//! form-style transcript mode for scripting.
//!
//! # Design Philosophy
//!
//! - **Answers on stdout, everything else on stderr**
//! - **Defaults on first run**: a missing or unsupported store is not an error
//! - **Config file optional**: flags override `.almanac.json`

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use solar_almanac::core::store_for;
use solar_almanac::shell::LIST_ALL_PLANETS;
use solar_almanac::{
    Almanac, AlmanacError, Config, Interpretation, PromptLoop, StoreKind, Transcript,
};

/// 🪐 Solar Almanac: ask about the planets in plain text.
#[derive(Parser, Debug)]
#[command(name = "almanac")]
#[command(version = solar_almanac::VERSION)]
#[command(about = "🪐 Solar Almanac: ask about the planets in plain text")]
#[command(after_help = "EXAMPLES:
  # Interactive prompt (type 'exit' to quit)
  almanac

  # One question, one answer
  almanac --ask \"How many moons does Mars have?\"

  # Every planet in catalog order
  almanac --list

  # Form-style log of questions read from stdin
  printf 'How massive is Neptune?\\nIs Pluto in the list of planets?\\n' | almanac --transcript
")]
struct Cli {
    // ═══════════════════════════════════════════════════════════════════════════
    // 🔭 QUESTIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Answer a single question and exit
    #[arg(long = "ask", value_name = "QUESTION", help_heading = "🔭 QUESTIONS")]
    ask: Option<String>,

    /// List all planets and exit
    #[arg(long = "list", conflicts_with = "ask", help_heading = "🔭 QUESTIONS")]
    list: bool,

    /// Read questions from stdin and print a Q/A transcript
    #[arg(long = "transcript", conflicts_with_all = ["ask", "list"], help_heading = "🔭 QUESTIONS")]
    transcript: bool,

    /// Also report which intent matched (on stderr)
    #[arg(long = "explain", help_heading = "🔭 QUESTIONS")]
    explain: bool,

    /// Skip the welcome banner in interactive mode
    #[arg(long = "no-banner", help_heading = "🔭 QUESTIONS")]
    no_banner: bool,

    // ═══════════════════════════════════════════════════════════════════════════
    // 🗄️ CATALOG DATA
    // ═══════════════════════════════════════════════════════════════════════════

    /// Config file path (default: ./.almanac.json when present)
    #[arg(short = 'c', long = "config", value_name = "FILE", help_heading = "🗄️ CATALOG DATA")]
    config: Option<PathBuf>,

    /// Catalog data file
    #[arg(long = "data-file", value_name = "FILE", help_heading = "🗄️ CATALOG DATA")]
    data_file: Option<PathBuf>,

    /// Store backend [json, placeholder]
    #[arg(long = "store", value_enum, help_heading = "🗄️ CATALOG DATA")]
    store: Option<StoreArg>,

    /// Do not write the default catalog when nothing could be loaded
    #[arg(long = "no-persist", help_heading = "🗄️ CATALOG DATA")]
    no_persist: bool,

    // ═══════════════════════════════════════════════════════════════════════════
    // ⚙️ DIAGNOSTICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help_heading = "⚙️ DIAGNOSTICS")]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", help_heading = "⚙️ DIAGNOSTICS")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StoreArg {
    Json,
    Placeholder,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Json => StoreKind::Json,
            StoreArg::Placeholder => StoreKind::Placeholder,
        }
    }
}

/// Map -v / -q onto a log level
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Stderr logging; RUST_LOG still overrides the flag-derived level
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

/// Resolve configuration: explicit file, then ./.almanac.json, then defaults.
///
/// An unreadable or invalid file is logged as a warning and the defaults are
/// used, so the run still exits 0.
fn resolve_config(cli: &Cli) -> Config {
    let mut config = if let Some(config_path) = &cli.config {
        match Config::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Could not load config file: {}", e);
                Config::default()
            }
        }
    } else {
        let default_config = Path::new(Config::FILE_NAME);
        if default_config.exists() {
            Config::from_file(default_config).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", Config::FILE_NAME, e);
                Config::default()
            })
        } else {
            Config::default()
        }
    };

    // Apply CLI overrides
    if let Some(data_file) = &cli.data_file {
        config.data_file = data_file.clone();
    }
    if let Some(store) = cli.store {
        config.store = store.into();
    }
    if cli.no_persist {
        config.persist_defaults = false;
    }

    config
}

fn explain(result: &Interpretation<'_>) {
    let subject = result.subject.map(|b| b.name.as_str()).unwrap_or("-");
    eprintln!("intent: {} (subject: {})", result.intent, subject);
}

/// Print one answer to stdout
fn answer_once(almanac: &Almanac, query: &str, show_intent: bool) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!(AlmanacError::EmptyQuery);
    }

    let result = almanac.interpret(query);
    if show_intent {
        explain(&result);
    }
    println!("{}", result.answer);
    Ok(())
}

/// Read stdin line by line into a transcript, then print it
fn run_transcript(almanac: &Almanac, show_intent: bool) -> anyhow::Result<()> {
    let mut transcript = Transcript::new(almanac.interpreter());

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match transcript.submit(&line) {
            Ok(result) => {
                if show_intent {
                    explain(&result);
                }
            }
            Err(AlmanacError::EmptyQuery) => {
                eprintln!("Warning: {}", AlmanacError::EmptyQuery);
            }
            Err(e) => return Err(e.into()),
        }
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(transcript.text().as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli);
    let store = store_for(&config);
    let almanac = Almanac::bootstrap(store.as_ref(), &config)
        .with_context(|| format!("loading catalog from {}", store.describe()))?;

    if let Some(query) = &cli.ask {
        return answer_once(&almanac, query, cli.explain);
    }

    if cli.list {
        return answer_once(&almanac, LIST_ALL_PLANETS, cli.explain);
    }

    if cli.transcript {
        return run_transcript(&almanac, cli.explain);
    }

    let stdin = io::stdin();
    let stats = PromptLoop::new(almanac.interpreter(), stdin.lock(), io::stdout())
        .with_banner(!cli.no_banner)
        .run()
        .context("prompt loop")?;
    log::info!(
        "session ended: {} answered, {} blank lines skipped",
        stats.answered,
        stats.skipped
    );
    Ok(())
}

fn main() {
    // Reset SIGPIPE to default behavior so `almanac --list | head` exits quietly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
