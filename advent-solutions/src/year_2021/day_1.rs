//! Day 1: Sonar Sweep
//!
//! Count how often consecutive depth measurements increase; part 2 smooths
//! the readings with a three-measurement sliding window first.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 1, tags = ["2021", "sonar"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected depth measurement, got {:?}",
                        line_idx + 1,
                        line
                    ))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sums: Vec<u32> = shared.windows(3).map(|w| w.iter().sum()).collect();
        Ok(count_increases(&sums).to_string())
    }
}

fn count_increases(depths: &[u32]) -> usize {
    depths.windows(2).filter(|pair| pair[0] < pair[1]).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_increasing_measurements_count_once() {
        assert_eq!(count_increases(&[99, 100]), 1);
    }

    #[test]
    fn three_increasing_measurements_count_twice() {
        assert_eq!(count_increases(&[98, 99, 100]), 2);
    }

    #[test]
    fn decreases_are_not_counted() {
        assert_eq!(count_increases(&[100, 101, 98]), 1);
    }

    #[test]
    fn example_report() {
        let mut depths =
            Solver::parse("199\n200\n208\n210\n200\n207\n240\n269\n260\n263").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut depths).unwrap(), "7");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut depths).unwrap(), "5");
    }

    #[test]
    fn rejects_non_numeric_line() {
        assert!(Solver::parse("199\nabc\n208").is_err());
    }
}
