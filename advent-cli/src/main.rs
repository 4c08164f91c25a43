//! Command-line runner for Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor = Executor::new(registry, &config)
        .map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Fail early if inputs are missing; there is no fetching
    let missing_inputs = check_missing_inputs(&work_items, &executor);
    if !missing_inputs.is_empty() {
        eprintln!("Missing {} input file(s):", missing_inputs.len());
        for (year, day) in &missing_inputs {
            eprintln!(
                "  - {}/day{:02} (expected at {})",
                year,
                day,
                executor.store().input_path(*year, *day).display()
            );
        }
        return Err(CliError::MissingInputs(missing_inputs.len()));
    }

    run_executor(executor, config.quiet)
}

/// Check which inputs are missing from the input directory
fn check_missing_inputs(work_items: &[WorkItem], executor: &Executor) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !executor.store().contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Run the executor and collect results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    println!("Running {} solver(s)...", work_items.len());

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    // Set up result channel
    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Collect and display results in order using aggregator
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        // Add to aggregator and print any results that are ready (in order)
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Drain any remaining buffered results (shouldn't happen if all results arrived)
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    // Wait for executor to finish
    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<advent_solver::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
