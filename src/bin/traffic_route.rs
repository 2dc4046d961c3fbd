use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;
use traffic_paths::{
    report::{render_json, render_text},
    run_with,
    utility::read_query_with_spinner,
    HeuristicKind,
};

/// Finds the cheapest route between two locations under predicted traffic,
/// once with uniform cost search and once with IDA*.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query document, read from stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print the outcome as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Lower bound used to prune IDA*
    #[arg(long, value_enum, default_value_t = HeuristicKind::MinCost)]
    heuristic: HeuristicKind,
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let input = match read_query_with_spinner(args.input.as_deref()) {
        Ok(input) => input,
        Err(load_error) => {
            error!("{}", load_error);
            return ExitCode::FAILURE;
        }
    };

    let graph = input.graph();
    let predictions = input.traffic_predictions();
    let outcome = match run_with(
        &input.source,
        &input.destination,
        &graph,
        &predictions,
        args.heuristic,
    ) {
        Ok(outcome) => outcome,
        Err(query_error) => {
            error!("{}", query_error);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match render_json(&outcome) {
            Ok(json) => println!("{}", json),
            Err(json_error) => {
                error!("{}", json_error);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_text(&outcome));
    }

    ExitCode::SUCCESS
}
