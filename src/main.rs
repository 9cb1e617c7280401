//! CLI entrypoint for the sightseeing route planner.
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use sightseer::distance::{DistanceMatrix, SystemIndex};
use sightseer::edsm::EdsmClient;
use sightseer::error::Error;
use sightseer::evaluation::{verify_route, Violation};
use sightseer::mission::{self, Missions};
use sightseer::models::{Route, SearchOutcome};
use sightseer::solver;

fn main() {
    let arguments = Arguments::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(error) = run(arguments) {
        eprintln!("sightseer: {error}");
        process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sightseer",
    about = "Shortest closed route through sightseeing mission destinations"
)]
struct Arguments {
    /// Maximum time the route search may take, in seconds
    #[arg(short = 't', long, value_name = "seconds", default_value_t = 123.0)]
    maximum_time: f64,
    /// Path to the mission sheet
    #[arg(short = 'f', long, value_name = "path", default_value = "000_missions.txt")]
    infile: PathBuf,
    /// Print the report as JSON instead of prose
    #[arg(long)]
    json: bool,
}

fn run(arguments: Arguments) -> Result<(), Error> {
    let missions = mission::load(&arguments.infile)?;
    if missions.travelers().is_empty() {
        warn!("the mission sheet lists no missions, the route stays home");
    }

    let (index, travelers) = intern_missions(&missions);

    let client = EdsmClient::new()?;
    let mut coords = Vec::with_capacity(index.size());
    for name in index.names() {
        coords.push(client.coords(name)?);
    }

    info!("calculating distances between {} systems", index.size());
    let matrix = DistanceMatrix::from_coords(&coords);

    let budget = Duration::from_secs_f64(arguments.maximum_time.max(0.0));
    let outcome = solver::solve(&matrix, &travelers, index.origin(), budget);

    if let Some(route) = &outcome.route {
        for violation in verify_route(route, &travelers, index.origin()) {
            warn!("{}", describe_violation(&violation, &index));
        }
    }

    let report = Report::new(&outcome, &index);
    if arguments.json {
        let payload = serde_json::to_string_pretty(&report).map_err(Error::SerializeReport)?;
        println!("{payload}");
    } else {
        print_prose(&report);
    }
    Ok(())
}

/// Interns every system the missions name, origin first.
fn intern_missions(missions: &Missions) -> (SystemIndex, Vec<Vec<usize>>) {
    let mut index = SystemIndex::new(missions.origin());
    let travelers: Vec<Vec<usize>> = missions
        .travelers()
        .iter()
        .map(|stops| stops.iter().map(|name| index.intern(name)).collect())
        .collect();
    (index, travelers)
}

/// Machine-readable counterpart of the prose report.
#[derive(Debug, Serialize)]
struct Report {
    /// Stops in visiting order, by system name. Absent when no route was
    /// found within the budget.
    route: Option<Vec<String>>,
    /// Total route length in light-years.
    total_distance: Option<f64>,
    /// Whether the route is provably shortest.
    exact: bool,
}

impl Report {
    fn new(outcome: &SearchOutcome, index: &SystemIndex) -> Self {
        let route = outcome.route.as_ref().map(|route| {
            route
                .stops()
                .iter()
                .map(|&stop| index.name(stop).to_string())
                .collect()
        });
        Self {
            route,
            total_distance: outcome.route.as_ref().map(Route::length),
            exact: outcome.exact,
        }
    }
}

fn print_prose(report: &Report) {
    match (&report.route, report.total_distance) {
        (Some(route), Some(total)) => {
            if report.exact {
                println!("\nThis is the shortest route.");
            } else {
                println!("\nThis is the best route that could be found in the allowed time; a shorter one may exist.");
            }
            println!("Route: {}", route.join(" -> "));
            println!("Total distance: {total:.2} ly\n");
        }
        _ => println!("\nNo route was found within the allowed time.\n"),
    }
}

/// Renders a violation with system names instead of matrix indices.
fn describe_violation(violation: &Violation, index: &SystemIndex) -> String {
    match violation {
        Violation::NotClosed { origin } => {
            format!("route does not start and end at {}", index.name(*origin))
        }
        Violation::OrderViolated {
            traveler,
            destination,
        } => format!(
            "traveler {} cannot reach {} in the required order",
            traveler,
            index.name(*destination)
        ),
        Violation::MissedDestination {
            traveler,
            destination,
        } => format!(
            "traveler {} never gets to {}",
            traveler,
            index.name(*destination)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sightseer::mission::parse;

    #[test]
    fn test_parses_default_arguments() {
        let args = Arguments::try_parse_from(["sightseer"]).expect("arguments should parse");
        assert_eq!(args.maximum_time, 123.0);
        assert_eq!(args.infile, PathBuf::from("000_missions.txt"));
        assert!(!args.json);
    }

    #[test]
    fn test_parses_overrides() {
        let args = Arguments::try_parse_from([
            "sightseer",
            "-t",
            "5.5",
            "-f",
            "custom_missions.txt",
            "--json",
        ])
        .expect("arguments should parse");
        assert_eq!(args.maximum_time, 5.5);
        assert_eq!(args.infile, PathBuf::from("custom_missions.txt"));
        assert!(args.json);
    }

    #[test]
    fn test_intern_missions_assigns_origin_zero() {
        let sheet = "I'm at\tSol\n< Missions START >\nAlioth\tAchenar\nAchenar\n";
        let missions = parse(sheet).expect("sheet should parse");
        let (index, travelers) = intern_missions(&missions);
        assert_eq!(index.origin(), 0);
        assert_eq!(index.name(0), "Sol");
        assert_eq!(travelers, vec![vec![1, 2], vec![2]]);
    }

    #[test]
    fn test_report_names_route_stops() {
        let mut index = SystemIndex::new("Sol");
        index.intern("Alioth");
        let outcome = SearchOutcome {
            route: Some(Route::new(vec![0, 1, 0], 16.0)),
            exact: true,
        };
        let report = Report::new(&outcome, &index);
        assert_eq!(
            report.route,
            Some(vec![
                "Sol".to_string(),
                "Alioth".to_string(),
                "Sol".to_string()
            ])
        );
        assert_eq!(report.total_distance, Some(16.0));
        assert!(report.exact);
    }

    #[test]
    fn test_report_without_route() {
        let index = SystemIndex::new("Sol");
        let outcome = SearchOutcome {
            route: None,
            exact: false,
        };
        let report = Report::new(&outcome, &index);
        assert_eq!(report.route, None);
        assert_eq!(report.total_distance, None);
        assert!(!report.exact);
    }

    #[test]
    fn test_describe_violation_uses_names() {
        let mut index = SystemIndex::new("Sol");
        index.intern("Alioth");
        let text = describe_violation(
            &Violation::MissedDestination {
                traveler: 0,
                destination: 1,
            },
            &index,
        );
        assert_eq!(text, "traveler 0 never gets to Alioth");
    }
}
