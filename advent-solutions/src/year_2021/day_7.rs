//! Day 7: The Treachery of Whales
//!
//! Align crab submarines at the cheapest position. Part 1 charges one fuel
//! per step, so the optimum is the median; part 2 charges triangular cost
//! `n(n+1)/2`, found by scanning the position range.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use itertools::{Itertools, MinMaxResult};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 7, tags = ["2021", "crabs"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let positions = input
            .trim()
            .split(',')
            .map(|number| {
                number.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("bad crab position {:?}", number))
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;
        if positions.is_empty() {
            return Err(ParseError::MissingData("no crab positions".to_string()));
        }
        Ok(positions)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let target = median(shared);
        let fuel: i64 = shared.iter().map(|position| (position - target).abs()).sum();
        Ok(fuel.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (lowest, highest) = match shared.iter().minmax() {
            MinMaxResult::NoElements => {
                return Err(SolveError::SolveFailed("no crab positions".into()));
            }
            MinMaxResult::OneElement(&only) => (only, only),
            MinMaxResult::MinMax(&min, &max) => (min, max),
        };

        let fuel = (lowest..=highest)
            .map(|target| {
                shared
                    .iter()
                    .map(|position| {
                        let distance = (position - target).abs();
                        distance * (distance + 1) / 2
                    })
                    .sum::<i64>()
            })
            .min()
            .unwrap_or(0);
        Ok(fuel.to_string())
    }
}

fn median(positions: &[i64]) -> i64 {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}
