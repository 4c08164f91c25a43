//! Day 6: Lanternfish
//!
//! Exponential population growth, modelled as a 9-bucket age histogram
//! rotated once per simulated day. Individual fish are never tracked; the
//! counts overflow u32 well before 256 days.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 6, tags = ["2021", "lanternfish"])]
pub struct Solver;

/// Fish counts indexed by days until spawning (0-8)
pub type AgeBuckets = [u64; 9];

impl PuzzleParser for Solver {
    type SharedData<'a> = AgeBuckets;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut buckets = [0u64; 9];
        for number in input.trim().split(',') {
            let age: usize = number.trim().parse().map_err(|_| {
                ParseError::InvalidFormat(format!("bad fish timer {:?}", number))
            })?;
            if age >= buckets.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "fish timer {} out of range 0-8",
                    age
                )));
            }
            buckets[age] += 1;
        }
        Ok(buckets)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(*shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population_after(*shared, 256).to_string())
    }
}

fn population_after(mut buckets: AgeBuckets, days: u32) -> u64 {
    for _ in 0..days {
        // Spawning fish reset to 6; their offspring enter at 8, which is
        // where the rotation puts the old bucket 0
        let spawning = buckets[0];
        buckets.rotate_left(1);
        buckets[6] += spawning;
    }
    buckets.iter().sum()
}
