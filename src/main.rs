use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use flightdeck::engine::core::aggregate::{self, Crosstab, GridKey, hour_axis};
use flightdeck::engine::core::export;
use flightdeck::engine::core::{FilterSet, FlightTable};
use flightdeck::engine::errors::AggregateError;
use flightdeck::engine::load::{self, DataSource};
use flightdeck::engine::schema::{Column, FieldKind};
use flightdeck::logging;
use flightdeck::shared::config::CONFIG;

#[derive(Parser)]
#[command(name = "flightdeck", about = "Aggregation pipeline over the flight-records dataset")]
struct Cli {
    /// Dataset path or URL; defaults to the configured source.
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Headline metrics: flight count, average delays, busiest airline and airport.
    Metrics {
        /// Emit machine-readable JSON instead of aligned text.
        #[arg(long)]
        json: bool,
    },
    /// Rows per distinct value of a categorical column, busiest first.
    GroupCount {
        #[arg(long, default_value = "AIRLINE")]
        column: String,
        #[arg(long)]
        json: bool,
    },
    /// Dense hour-of-day x airline grid of delayed departures.
    Crosstab,
    /// Export the (optionally filtered) table as CSV.
    Export {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_delimiter = ',')]
        airlines: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        origins: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        destinations: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    let raw_source = cli
        .source
        .clone()
        .unwrap_or_else(|| CONFIG.dataset.source.clone());
    let source = DataSource::resolve(&raw_source);
    let table = load::load(&source, CONFIG.dataset.fetch_timeout_secs).await?;

    match cli.command {
        Command::Metrics { json } => metrics(&table, json)?,
        Command::GroupCount { column, json } => group_count(&table, &column, json)?,
        Command::Crosstab => crosstab(&table)?,
        Command::Export {
            out,
            airlines,
            origins,
            destinations,
        } => export_csv(&table, &out, airlines, origins, destinations)?,
    }

    Ok(())
}

/// `n/a` stands in when an aggregate has no input rows.
fn display_mean(result: Result<f64, AggregateError>) -> anyhow::Result<String> {
    match result {
        Ok(v) => Ok(format!("{:.2} min", v)),
        Err(AggregateError::EmptyInput) => Ok("n/a".to_string()),
        Err(e) => Err(e.into()),
    }
}

fn display_mode(result: Result<String, AggregateError>) -> anyhow::Result<String> {
    match result {
        Ok(v) => Ok(v),
        Err(AggregateError::EmptyInput) => Ok("n/a".to_string()),
        Err(e) => Err(e.into()),
    }
}

fn metrics(table: &FlightTable, json: bool) -> anyhow::Result<()> {
    let view = table.view();
    let flights = aggregate::total_count(&view);
    let dep_delay = display_mean(aggregate::mean(&view, Column::DepartureDelay))?;
    let dest_delay = display_mean(aggregate::mean(&view, Column::DestinationDelay))?;
    let airline = display_mode(aggregate::mode(&view, Column::Airline))?;
    let airport = display_mode(aggregate::mode(&view, Column::OriginAirport))?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "flights": flights,
                "mean_departure_delay": dep_delay,
                "mean_destination_delay": dest_delay,
                "busiest_airline": airline,
                "busiest_origin_airport": airport,
            })
        );
    } else {
        println!("flights:                {}", flights);
        println!("mean departure delay:   {}", dep_delay);
        println!("mean destination delay: {}", dest_delay);
        println!("busiest airline:        {}", airline);
        println!("busiest origin airport: {}", airport);
    }
    Ok(())
}

fn group_count(table: &FlightTable, column: &str, json: bool) -> anyhow::Result<()> {
    let column = Column::from_name(column)
        .with_context(|| format!("unknown column '{}'", column))?;
    if column.kind() != FieldKind::Categorical {
        bail!("group-count needs a categorical column, {} is not", column);
    }

    let mut counts = aggregate::group_count(&table.view(), column)?;
    counts.sort_by(|_, a, _, b| b.cmp(a));

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        for (value, count) in &counts {
            println!("{:<8} {}", value, count);
        }
    }
    Ok(())
}

fn crosstab(table: &FlightTable) -> anyhow::Result<()> {
    let delayed = FilterSet::new()
        .negative(Column::DepartureDelay)
        .apply(table);
    let mut grid = Crosstab::compute(
        &delayed,
        GridKey::HourOfDay(Column::ScheduledDeparture),
        GridKey::Category(Column::Airline),
    )?;
    grid.complete_rows(&hour_axis());

    print!("hour");
    for col in grid.cols() {
        print!(" {:>6}", col);
    }
    println!();
    for row in grid.rows() {
        print!("{:>4}", row);
        for col in grid.cols() {
            print!(" {:>6}", grid.get(row, col));
        }
        println!();
    }
    Ok(())
}

fn export_csv(
    table: &FlightTable,
    out: &PathBuf,
    airlines: Vec<String>,
    origins: Vec<String>,
    destinations: Vec<String>,
) -> anyhow::Result<()> {
    let mut filter = FilterSet::new();
    if !airlines.is_empty() {
        filter = filter.in_set(Column::Airline, airlines);
    }
    if !origins.is_empty() {
        filter = filter.in_set(Column::OriginAirport, origins);
    }
    if !destinations.is_empty() {
        filter = filter.in_set(Column::DestinationAirport, destinations);
    }

    let view = filter.apply(table);
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    export::write_csv(&view, file)?;
    info!(target: "cli", rows = view.len(), out = %out.display(), "Export complete");
    println!("wrote {} rows to {}", view.len(), out.display());
    Ok(())
}
