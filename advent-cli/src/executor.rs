//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, ParseError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver part execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, advent_solver::SolverError>,
    pub solve_duration: TimeDelta,
    /// Set on the first result of each parsed instance so parse time is
    /// reported (and summed) once per parse
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    runner_config: RunnerConfig,
    thread_pool: rayon::ThreadPool,
}

struct RunnerConfig {
    registry: SolverRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            runner_config: RunnerConfig {
                registry,
                store: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// The input store this executor reads from
    pub fn store(&self) -> &InputStore {
        &self.runner_config.store
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.runner_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.runner_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.runner_config.parallelize_by {
            ParallelizeBy::Sequential => {
                // No parallelization, execute all in order
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.runner_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using the thread pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items (Part additionally
            // parallelizes within run_solver)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let runner_config = &self.runner_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, runner_config).err())
                .reduce_with(|err1, err2| match err2 {
                    Some(err2) => Some(ArcExecutorError::combine_opt(err1, err2)),
                    None => err1,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let runner_config = &self.runner_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, runner_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match err2 {
                    Some(err2) => Some(ArcExecutorError::combine_opt(err1, err2)),
                    None => err1,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Create an error result for a part that could not be attempted
fn make_error_result(year: u16, day: u8, part: u8, error: ParseError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(advent_solver::SolverError::ParseError(error)),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

/// Run all parts of one work item
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    runner_config: &RunnerConfig,
) -> Result<(), ArcExecutorError> {
    let input = match get_input(work, &runner_config.store) {
        Ok(input) => input,
        Err(e) => {
            // Report the failure once per part so every expected result arrives
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(
                    work.year,
                    work.day,
                    part,
                    ParseError::MissingData(error_msg.clone()),
                ))
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(runner_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, runner_config)
    } else {
        run_solver_sequential(work, &input, tx, runner_config)
    }
}

/// Run solver with part-level parallelism, buffering results to emit in order
///
/// Each part parses its own instance, so every result carries its own parse
/// duration.
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    runner_config: &RunnerConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let registry = &runner_config.registry;

    // Solve parts in parallel
    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => {
                    let parse_duration = Some(solver.parse_duration());
                    solve_part_timed(year, day, part, &mut *solver, parse_duration)
                }
                Err(e) => SolverResult {
                    year,
                    day,
                    part,
                    answer: Err(e),
                    solve_duration: TimeDelta::zero(),
                    parse_duration: None,
                },
            };
            rtx.send(result).ok();
        });

    // Buffer and emit results in part order
    let mut buffer: [Option<SolverResult>; 2] = [None, None];
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for result in result_rx {
        let idx = (result.part - start_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(result);
        }
        // Emit buffered results in order
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Run all parts on a single parsed instance, in order
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    runner_config: &RunnerConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match runner_config.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            // Parsing failed; report once per part
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(
                    year,
                    day,
                    part,
                    ParseError::InvalidFormat(error_msg.clone()),
                ))
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let result = solve_part_timed(year, day, part, &mut *solver, parse_duration.take());
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Read input for a work item from the store
fn get_input(work: &WorkItem, store: &InputStore) -> Result<String, ExecutorError> {
    let (year, day) = (work.year, work.day);
    store
        .get(year, day)
        .map_err(|e| ExecutorError::InputRead {
            year,
            day,
            source: Box::new(e),
        })?
        .ok_or_else(|| ExecutorError::InputMissing {
            year,
            day,
            path: store.input_path(year, day),
        })
}

/// Solve a single part with timing
fn solve_part_timed(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve(part) {
        Ok(outcome) => SolverResult {
            year,
            day,
            part,
            solve_duration: outcome.duration(),
            answer: Ok(outcome.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            solve_duration: TimeDelta::zero(),
            parse_duration,
        },
    }
}
