//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// Defines the shared data type and parsing logic for a solver, keeping
/// parsing separate from solving.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// Parsed input plus any intermediate results shared between parts.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving one specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...), so each part is a
/// separate impl validated at compile time. The `PuzzleSolver` derive macro
/// generates the dispatching [`Solver`] impl from these.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait the registry works with.
///
/// Extends [`PuzzleParser`] to inherit the `SharedData` type and `parse()`.
/// Usually generated by `#[derive(PuzzleSolver)]` from the [`PartSolver`]
/// impls, but can be written by hand for dynamic part dispatch.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension methods for [`Solver`]
pub trait SolverExt: Solver {
    /// Solve a part, rejecting part numbers outside `1..=PARTS`
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
