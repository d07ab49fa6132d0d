//! Skillboard - Entry Point
//!
//! Modes:
//! - Default: dashboard server
//! - --print / -p: print the ranking table to stdout and exit

use skillboard::{Config, DashboardServer, SortColumn, SortDirection, TableView};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Parse args
    let args: Vec<String> = std::env::args().collect();
    let print_mode = args.iter().any(|a| a == "--print" || a == "-p");
    let help_mode = args.iter().any(|a| a == "--help" || a == "-h");

    if help_mode {
        println!("Skillboard v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage: skillboard [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --print, -p          Print the ranking table and exit");
        println!("  --query <TEXT>       Search text (print mode)");
        println!("  --category <A,B>     Category filter (print mode)");
        println!("  --sort <COLUMN>      Sort column, e.g. avgSalary (print mode)");
        println!("  --desc               Sort descending (print mode)");
        println!("  --help, -h           Show this help");
        println!();
        println!("Default: Run the dashboard server");
        println!();
        println!("Environment variables:");
        println!("  SKILLBOARD_DATA_PATH    Catalog file (TOML or JSON)");
        println!("  DASHBOARD_BIND_ADDR     Bind address (default: 127.0.0.1)");
        println!("  DASHBOARD_PORT          Port (default: 8080)");
        println!("  DASHBOARD_LOG_REQUESTS  Log each request (default: true)");
        println!("  DASHBOARD_CORS_ENABLED  Restrict CORS to DASHBOARD_CORS_ORIGINS (default: true)");
        println!("  DASHBOARD_CORS_ORIGINS  Comma-separated allowed origins");
        return Ok(());
    }

    // Setup logging based on mode
    let log_level = std::env::var("RUST_LOG")
        .map(|s| match s.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        })
        .unwrap_or(if print_mode { Level::WARN } else { Level::INFO });

    if print_mode {
        // stdout carries the table - log to stderr as JSON
        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_ansi(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let config = Config::from_env()?;
    let store = config.load_store().await?;

    if print_mode {
        let view = view_from_args(&args)?;
        let result = view.apply(store.skills());

        println!(
            "{:>4}  {:<20} {:>6} {:>10} {:>9} {:>8}  {}",
            "#", "Skill", "Score", "Salary", "Openings", "7d", "Demand"
        );
        for row in result.display_rows() {
            println!(
                "{:>4}  {:<20} {:>6} {:>10} {:>9} {:>8}  {}",
                row.rank,
                row.name,
                row.market_score,
                row.avg_salary,
                row.job_openings,
                row.week_growth.display,
                row.demand_level
            );
        }
        println!();
        println!("{}", result.summary());
    } else {
        info!("Skillboard v{}", env!("CARGO_PKG_VERSION"));

        let server = DashboardServer::new(config.dashboard, Arc::new(store));
        server.run().await?;
    }

    Ok(())
}

/// Build the table view from `--query`, `--category`, `--sort` and `--desc`
fn view_from_args(args: &[String]) -> anyhow::Result<TableView> {
    let value_of = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    };

    let column = match value_of("--sort") {
        Some(name) => name.parse::<SortColumn>()?,
        None => SortColumn::default(),
    };
    let direction = if args.iter().any(|a| a == "--desc") {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let categories = value_of("--category")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty());

    Ok(TableView::new()
        .with_query(value_of("--query").unwrap_or_default())
        .with_categories(categories)
        .with_sort(column, direction))
}
