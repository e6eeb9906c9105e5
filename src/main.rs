use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use spendtrack::cli::{
    handle_add, handle_config, handle_export, handle_list, handle_predict, handle_report,
    handle_search, handle_summary,
};
use spendtrack::config::Paths;
use spendtrack::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendtrack",
    version,
    about = "Command-line expense tracker with charts, forecasting and PDF reports",
    long_about = "spendtrack keeps expense records in a plain CSV file, derives \
                  monthly and category summaries, projects next month's spending \
                  with a linear trend, and compiles a multi-page PDF report with \
                  charts and a tabular appendix."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Expense date (YYYY-MM-DD)
        date: String,
        /// Category label
        category: String,
        /// Amount spent
        amount: f64,
        /// Free-text description
        #[arg(default_value = "")]
        description: String,
    },

    /// List expenses, optionally filtered
    List {
        /// Filter by category (case-insensitive exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Range start date (YYYY-MM-DD), inclusive
        #[arg(long, requires = "end")]
        start: Option<String>,
        /// Range end date (YYYY-MM-DD), inclusive
        #[arg(long, requires = "start")]
        end: Option<String>,
        /// Maximum number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search every field of every record for a substring
    Search {
        /// Text to look for (case-insensitive)
        text: String,
    },

    /// Show monthly totals (default) or category totals
    Summary {
        /// Group by category instead of month
        #[arg(long)]
        by_category: bool,
    },

    /// Project next month's spending from the monthly trend
    Predict,

    /// Export the monthly summary as a spreadsheet
    Export,

    /// Generate charts, the spreadsheet and the full PDF report
    Report,

    /// Show resolved paths
    Config,
}

fn main() -> Result<()> {
    init_logger(LevelFilter::INFO);

    let cli = Cli::parse();
    let paths = Paths::new();
    let store = ExpenseStore::new(paths.expenses_file());
    store.init()?;

    match cli.command {
        Commands::Add {
            date,
            category,
            amount,
            description,
        } => handle_add(&store, &date, &category, amount, &description)?,
        Commands::List {
            category,
            start,
            end,
            limit,
        } => handle_list(
            &store,
            category.as_deref(),
            start.as_deref(),
            end.as_deref(),
            limit,
        )?,
        Commands::Search { text } => handle_search(&store, &text)?,
        Commands::Summary { by_category } => handle_summary(&store, by_category)?,
        Commands::Predict => handle_predict(&store)?,
        Commands::Export => handle_export(&store, &paths)?,
        Commands::Report => handle_report(&store, &paths)?,
        Commands::Config => handle_config(&paths)?,
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
