//! Day 3: Binary Diagnostic
//!
//! Part 1 builds the gamma rate from the most common bit of each column
//! (ties resolve to 1) and multiplies it by its complement, the epsilon
//! rate. Part 2 repeatedly filters the report rows on the most common
//! (oxygen) or least common (CO2) bit per column until one row survives.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 3, tags = ["2021", "diagnostic"])]
pub struct Solver;

impl PuzzleParser for Solver {
    // Rows borrow from the input; no transformation is needed up front.
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<&str> = input.trim().lines().map(str::trim).collect();
        let width = rows
            .first()
            .map(|row| row.len())
            .ok_or_else(|| ParseError::MissingData("empty diagnostic report".to_string()))?;

        for (line_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected {} bits, got {}",
                    line_idx + 1,
                    width,
                    row.len()
                )));
            }
            if !row.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) non-binary digit in {:?}",
                    line_idx + 1,
                    row
                )));
            }
        }
        Ok(rows)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let width = shared[0].len();
        let mut gamma: u64 = 0;
        for position in 0..width {
            gamma <<= 1;
            if ones_in_majority(shared, position) {
                gamma |= 1;
            }
        }
        let epsilon = !gamma & ((1 << width) - 1);
        Ok((gamma * epsilon).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = filter_rating(shared, BitCriteria::MostCommon)?;
        let co2 = filter_rating(shared, BitCriteria::LeastCommon)?;
        Ok((oxygen * co2).to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitCriteria {
    MostCommon,
    LeastCommon,
}

/// True iff at least half the rows have a 1 at `position` (ties count as a
/// majority, per the puzzle's tie rule)
fn ones_in_majority(rows: &[&str], position: usize) -> bool {
    let ones = rows
        .iter()
        .filter(|row| row.as_bytes()[position] == b'1')
        .count();
    2 * ones >= rows.len()
}

fn filter_rating(rows: &[&str], criteria: BitCriteria) -> Result<u64, SolveError> {
    let mut remaining = rows.to_vec();
    for position in 0..rows[0].len() {
        if remaining.len() == 1 {
            break;
        }
        let keep = match criteria {
            BitCriteria::MostCommon => ones_in_majority(&remaining, position),
            BitCriteria::LeastCommon => !ones_in_majority(&remaining, position),
        };
        let keep_byte = if keep { b'1' } else { b'0' };
        remaining.retain(|row| row.as_bytes()[position] == keep_byte);
    }

    let row = remaining
        .first()
        .ok_or_else(|| SolveError::SolveFailed("no rating row survived filtering".into()))?;
    u64::from_str_radix(row, 2)
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010";

    #[test]
    fn example_power_consumption() {
        let mut report = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut report).unwrap(), "198");
    }

    #[test]
    fn example_life_support_rating() {
        let mut report = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut report).unwrap(), "230");
    }

    #[test]
    fn tie_keeps_ones_for_oxygen() {
        // Rows tie in column 0, so the most-common filter keeps the 1 rows
        let rows = vec!["10", "01"];
        assert_eq!(filter_rating(&rows, BitCriteria::MostCommon).unwrap(), 0b10);
        assert_eq!(filter_rating(&rows, BitCriteria::LeastCommon).unwrap(), 0b01);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Solver::parse("101\n10").is_err());
    }

    #[test]
    fn rejects_non_binary_digits() {
        assert!(Solver::parse("102").is_err());
    }

    #[test]
    fn rejects_empty_report() {
        assert!(Solver::parse("").is_err());
    }
}
