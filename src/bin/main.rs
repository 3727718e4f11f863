//! Piste CLI - Ski resort dashboard
//!
//! Usage:
//!   piste serve [--port <port>] [--open]
//!   piste continents
//!   piste countries <continent>
//!   piste map --price <n> [--flag <flag>]...
//!   piste top --continent <c> --country <c> --metric <m>
//!   piste rank <resort>
//!
//! Examples:
//!   piste --data ./resorts.csv serve --open
//!   piste map --price 80 --flag nightskiing --flag snowparks
//!   piste top --continent Europe --country Austria --metric highest-point
//!   piste --output json rank "Zermatt"

use clap::{Parser, Subcommand, ValueEnum};
use piste::config::Settings;
use piste::dataset::{Dataset, Flag, Metric};
use piste::view::{self, HoverData, MapQuery, RankingQuery, Update};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "piste")]
#[command(about = "Piste - Ski resort price map, country rankings and resort reports")]
#[command(version)]
struct Cli {
    /// Resort CSV file (overrides the config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (defaults to $PISTE_CONFIG, ./piste.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output format for query commands
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the dashboard in a browser
        #[arg(long)]
        open: bool,
    },

    /// List continents
    Continents,

    /// List countries on a continent
    Countries {
        continent: String,
    },

    /// Resorts under a nightly price, optionally filtered by amenities
    Map {
        /// Price threshold (exclusive)
        #[arg(long, default_value_t = 60.0)]
        price: f64,

        /// Required amenity; repeat for several
        #[arg(long = "flag", value_enum)]
        flags: Vec<FlagArg>,
    },

    /// Top resorts of a country by one metric
    Top {
        #[arg(long, default_value = view::DEFAULT_CONTINENT)]
        continent: String,

        #[arg(long, default_value = view::DEFAULT_COUNTRY)]
        country: String,

        #[arg(long, value_enum, default_value = "price")]
        metric: MetricArg,
    },

    /// Country ranks of one resort
    Rank {
        resort: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FlagArg {
    Nightskiing,
    Snowparks,
    SummerSkiing,
}

impl From<FlagArg> for Flag {
    fn from(arg: FlagArg) -> Self {
        match arg {
            FlagArg::Nightskiing => Flag::Nightskiing,
            FlagArg::Snowparks => Flag::Snowparks,
            FlagArg::SummerSkiing => Flag::SummerSkiing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Price,
    HighestPoint,
    LowestPoint,
    TotalSlopes,
    TotalLifts,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Price => Metric::Price,
            MetricArg::HighestPoint => Metric::HighestPoint,
            MetricArg::LowestPoint => Metric::LowestPoint,
            MetricArg::TotalSlopes => Metric::TotalSlopes,
            MetricArg::TotalLifts => Metric::TotalLifts,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable lines
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let data_path = match cli.data.clone() {
        Some(path) => path,
        None => match settings.data.resolved_path() {
            Ok(path) => path,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let dataset = match Dataset::from_path(&data_path) {
        Ok(d) => d,
        Err(e) => {
            error!("cannot start without resort data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = cli.output;
    match cli.command {
        Commands::Serve { host, port, open } => cmd_serve(dataset, settings, host, port, open),
        Commands::Continents => {
            let continents = view::continent_options(&dataset);
            print_list(output, &continents)
        }
        Commands::Countries { continent } => {
            let countries = view::country_options(&dataset, &continent);
            print_list(output, &countries)
        }
        Commands::Map { price, flags } => cmd_map(&dataset, &settings, output, price, flags),
        Commands::Top {
            continent,
            country,
            metric,
        } => cmd_top(&dataset, &settings, output, continent, country, metric.into()),
        Commands::Rank { resort } => cmd_rank(&dataset, output, resort),
    }
}

#[cfg(feature = "ui")]
fn cmd_serve(
    dataset: Dataset,
    settings: Settings,
    host: Option<String>,
    port: Option<u16>,
    open: bool,
) -> ExitCode {
    use piste::web::{serve, AppState};

    let state = AppState {
        dataset,
        map_layout: settings.map.layout(),
        top_n: settings.chart.top_n,
    };
    let host = host.unwrap_or(settings.server.host);
    let port = port.unwrap_or(settings.server.port);
    let open = open || settings.server.open_browser;

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(serve(state, &host, port, open)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ui"))]
fn cmd_serve(
    _dataset: Dataset,
    _settings: Settings,
    _host: Option<String>,
    _port: Option<u16>,
    _open: bool,
) -> ExitCode {
    error!("piste was built without the `ui` feature; rebuild with --features ui to serve");
    ExitCode::FAILURE
}

fn cmd_map(
    dataset: &Dataset,
    settings: &Settings,
    output: OutputFormat,
    price: f64,
    flags: Vec<FlagArg>,
) -> ExitCode {
    let query = MapQuery {
        price,
        selections: flags.into_iter().map(Flag::from).collect(),
    };
    let map = view::map_view(dataset, &query, &settings.map.layout());

    match output {
        OutputFormat::Json => print_json(&map),
        OutputFormat::Text => {
            println!("{}", map.header);
            for point in &map.figure.points {
                println!(
                    "  {:<40} ${:<6} ({:.4}, {:.4})",
                    point.resort, point.z, point.lat, point.lon
                );
            }
            println!("{} resorts", map.figure.points.len());
            ExitCode::SUCCESS
        }
    }
}

fn cmd_top(
    dataset: &Dataset,
    settings: &Settings,
    output: OutputFormat,
    continent: String,
    country: String,
    metric: Metric,
) -> ExitCode {
    // The CLI invocation itself is the explicit request, so the gate is armed.
    let query = RankingQuery {
        continent,
        country,
        metric,
        n_clicks: Some(1),
    };

    let Update::Updated(ranking) = view::ranking_view(dataset, &query, settings.chart.top_n) else {
        return ExitCode::SUCCESS;
    };

    match output {
        OutputFormat::Json => print_json(&ranking),
        OutputFormat::Text => {
            println!("{}", ranking.header);
            for (i, bar) in ranking.figure.bars.iter().enumerate() {
                println!("  {}. {:<40} {}", i + 1, bar.label, bar.value);
            }
            if ranking.figure.bars.is_empty() {
                println!("  (no resorts)");
            }
            ExitCode::SUCCESS
        }
    }
}

fn cmd_rank(dataset: &Dataset, output: OutputFormat, resort: String) -> ExitCode {
    let hover = HoverData::for_resort(resort);
    let report = match view::resort_report(dataset, Some(&hover)) {
        Ok(Update::Updated(report)) => report,
        Ok(Update::NoChange) => return ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!("{}", report.name);
            println!("  {}", report.elevation_rank);
            println!("  {}", report.price_rank);
            println!("  {}", report.slope_rank);
            println!("  {}", report.cannon_rank);
            ExitCode::SUCCESS
        }
    }
}

fn print_list(output: OutputFormat, values: &[String]) -> ExitCode {
    match output {
        OutputFormat::Json => print_json(&values),
        OutputFormat::Text => {
            for value in values {
                println!("{}", value);
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}
