use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use ctdocket_core::{CaseCategory, CaseRecord, DateRange};

#[derive(Debug, Parser)]
#[command(name = "ctdocket-cli")]
#[command(about = "Court docket scraper for the Connecticut civil inquiry portal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect every court case on the calendar for one day.
    Collect {
        /// Day to query (YYYY-MM-DD). The portal only accepts today or later.
        #[arg(long)]
        date: NaiveDate,

        /// Case category: civil or family.
        #[arg(long, default_value = "civil")]
        category: CaseCategory,
    },
    /// Collect cases for every day in an inclusive date range.
    CollectRange {
        /// First day of the range (YYYY-MM-DD).
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the range (YYYY-MM-DD), inclusive.
        #[arg(long)]
        end: NaiveDate,

        /// Case category: civil or family.
        #[arg(long, default_value = "civil")]
        category: CaseCategory,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ctdocket_core::load_app_config_from_env()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Collect { date, category } => {
            tracing::info!(%date, %category, "collecting court cases");
            let cases = ctdocket_scraper::scrape_day(&config, date, category).await?;
            print_records(&cases)?;
        }
        Commands::CollectRange {
            start,
            end,
            category,
        } => {
            let range = DateRange::new(start, end)?;
            tracing::info!(%start, %end, %category, "collecting court cases for range");
            let cases = ctdocket_scraper::scrape_range(&config, range, category).await?;
            let cases: Vec<CaseRecord> = cases.into_iter().collect();
            print_records(&cases)?;
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_records(cases: &[CaseRecord]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(cases)?);
    Ok(())
}
