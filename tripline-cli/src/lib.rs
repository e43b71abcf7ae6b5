//! Command-line front end for the Tripline planner.
//!
//! Two subcommands: `demo` plans a round trip over a small built-in
//! distance table, and `plan` plans against a live OSRM instance with
//! lookups memoized through the distance cache.

#![forbid(unsafe_code)]

mod error;
mod report;

pub use error::CliError;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tripline_core::{
    CachedDistanceProvider, Location, RoutePlan, TableDistanceProvider, TravelEstimate,
    plan_route_naive, plan_route_naive_round_trip,
};
use tripline_osrm::{OsrmDistanceProvider, OsrmDistanceProviderConfig};

/// Run the Tripline CLI with the current process arguments.
///
/// # Errors
///
/// Returns [`CliError`] for argument, provider or planning failures.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Demo => run_demo(),
        Command::Plan(args) => run_plan(&args),
    }
}

#[derive(Debug, Parser)]
#[command(name = "tripline", about = "Plan multi-stop travel routes", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a round trip over a small built-in distance table.
    Demo,
    /// Plan a route against an OSRM routing service.
    Plan(PlanArgs),
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Args)]
struct PlanArgs {
    /// Start location as NAME=LAT,LON.
    #[arg(long, value_name = "NAME=LAT,LON")]
    start: String,
    /// Stop to visit as NAME=LAT,LON; repeat for several stops.
    #[arg(long = "stop", value_name = "NAME=LAT,LON", required = true)]
    stops: Vec<String>,
    /// Base URL of the OSRM instance.
    #[arg(long, default_value = tripline_osrm::DEFAULT_BASE_URL)]
    base_url: String,
    /// OSRM routing profile.
    #[arg(long, default_value = "driving")]
    profile: String,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// Return to the start after the last stop.
    #[arg(long)]
    round_trip: bool,
    /// Emit the plan as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn run_demo() -> Result<(), CliError> {
    let plan = demo_plan()?;

    println!("Tripline demo");
    println!("=============");
    print!("{}", report::render_plan(&plan));
    println!("Why this order? The planner always hops to the closest remaining stop.");
    Ok(())
}

/// Round trip over the built-in table: Start -> A -> B -> C -> Start.
fn demo_plan() -> Result<RoutePlan, CliError> {
    let start = Location::new("Start", 0.0, 0.0)?;
    let stops = vec![
        Location::new("A", 1.0, 1.0)?,
        Location::new("B", 2.0, 2.0)?,
        Location::new("C", 3.0, 3.0)?,
    ];

    let table = TableDistanceProvider::new()
        .with_entry("Start", "A", TravelEstimate::new(10.0, 12.0))
        .with_entry("Start", "B", TravelEstimate::new(5.0, 7.0))
        .with_entry("Start", "C", TravelEstimate::new(8.0, 9.0))
        .with_entry("A", "B", TravelEstimate::new(2.0, 3.0))
        .with_entry("A", "C", TravelEstimate::new(4.0, 5.0))
        .with_entry("B", "C", TravelEstimate::new(3.0, 4.0));

    Ok(plan_route_naive_round_trip(&start, &stops, &table)?)
}

fn run_plan(args: &PlanArgs) -> Result<(), CliError> {
    let start = parse_location(&args.start)?;
    let stops = args
        .stops
        .iter()
        .map(|argument| parse_location(argument))
        .collect::<Result<Vec<_>, _>>()?;

    let config = OsrmDistanceProviderConfig::new(args.base_url.clone())
        .with_profile(args.profile.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let provider = OsrmDistanceProvider::with_config(config).map_err(|source| {
        CliError::BuildProvider {
            base_url: args.base_url.clone(),
            source,
        }
    })?;
    // The naive planner looks pairs up during ordering and again during
    // assembly; the cache keeps that to one request per pair.
    let provider = CachedDistanceProvider::new(provider);

    let plan = if args.round_trip {
        plan_route_naive_round_trip(&start, &stops, &provider)?
    } else {
        plan_route_naive(&start, &stops, &provider)?
    };

    if args.json {
        let rendered = serde_json::to_string_pretty(&plan).map_err(CliError::SerializePlan)?;
        println!("{rendered}");
    } else {
        print!("{}", report::render_plan(&plan));
    }
    Ok(())
}

/// Parse a `NAME=LAT,LON` argument into a validated [`Location`].
fn parse_location(argument: &str) -> Result<Location, CliError> {
    let malformed = || CliError::MalformedLocation {
        argument: argument.to_owned(),
    };

    let (name, coordinates) = argument.split_once('=').ok_or_else(malformed)?;
    let (latitude, longitude) = coordinates.split_once(',').ok_or_else(malformed)?;

    let parse = |text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|source| CliError::MalformedCoordinate {
                argument: argument.to_owned(),
                source,
            })
    };

    Ok(Location::new(name.trim(), parse(latitude)?, parse(longitude)?)?)
}
