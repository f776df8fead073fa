use std::io::{self, Write};
use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, Subcommand};
use desksearch::cli::render::{self, Palette};
use desksearch::cli::Prompt;
use desksearch::core::config::Config;
use desksearch::core::database::Database;
use desksearch::core::types::{EntityKind, NULL_OR_EMPTY};
use desksearch::search::SearchQuery;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "desksearch")]
#[command(about = "Exact-match search over organizations, users and tickets", long_about = None)]
struct Cli {
    /// TOML config file (defaults to ./desksearch.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding organizations.json, users.json and tickets.json
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search prompt (default)
    Interactive,

    /// Run one search and print the results
    Search {
        /// organization, user or ticket
        kind: EntityKind,

        field: String,

        /// Omit to find records where the field is empty
        value: Option<String>,
    },

    /// List searchable fields
    Fields { kind: Option<EntityKind> },

    /// Show load and index statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.data_dir, cli.no_color);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.as_str().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let palette = Palette::new(config.color);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Commands::Fields { kind }) = &cli.command {
        let kinds = kind.map_or(EntityKind::ALL.to_vec(), |kind| vec![kind]);
        for kind in kinds {
            render::render_fields(&mut out, kind, palette)?;
        }
        return Ok(());
    }

    let db = Database::open(&config)
        .with_context(|| format!("failed to load data from {}", config.data_dir.display()))?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let editor = DefaultEditor::new().context("failed to start line editor")?;
            Prompt::new(&db, editor, &mut out, palette).run()?;
        }
        Commands::Search { kind, field, value } => {
            let query = SearchQuery::new(kind, field, value.unwrap_or_else(|| NULL_OR_EMPTY.to_string()));
            let results = db.search(&query).with_context(|| format!("search for {query} failed"))?;
            render::render_results(&mut out, &results, palette)?;
        }
        Commands::Stats { json } => {
            let stats = db.stats();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                render::render_stats(&mut out, &stats, palette)?;
            }
        }
        Commands::Fields { .. } => {}
    }
    Ok(())
}
