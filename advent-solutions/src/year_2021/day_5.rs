//! Day 5: Hydrothermal Venture
//!
//! Rasterize vent line segments onto an integer grid and count the points
//! covered by at least two segments. Part 1 only considers horizontal and
//! vertical segments; part 2 adds the 45-degree diagonals.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use anyhow::anyhow;
use itertools::Itertools;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 5, tags = ["2021", "vents"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    from: (i32, i32),
    to: (i32, i32),
}

impl Segment {
    fn is_axis_aligned(&self) -> bool {
        self.from.0 == self.to.0 || self.from.1 == self.to.1
    }

    /// All grid points from `from` to `to` inclusive, stepping one cell at
    /// a time along each axis' direction
    fn points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let step_x = (self.to.0 - self.from.0).signum();
        let step_y = (self.to.1 - self.from.1).signum();
        let steps = (self.to.0 - self.from.0)
            .abs()
            .max((self.to.1 - self.from.1).abs());
        (0..=steps).map(move |i| (self.from.0 + step_x * i, self.from.1 + step_y * i))
    }
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Segment>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| -> Result<Segment, anyhow::Error> {
                let (from, to) = line
                    .trim()
                    .split_once(" -> ")
                    .ok_or_else(|| anyhow!("expected 'x1,y1 -> x2,y2', got {:?}", line))?;
                Ok(Segment {
                    from: parse_point(from)?,
                    to: parse_point(to)?,
                })
            })
            .enumerate()
            .map(|(line_idx, res)| {
                res.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

fn parse_point(text: &str) -> Result<(i32, i32), anyhow::Error> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'x,y', got {:?}", text))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let axis_aligned = shared
            .iter()
            .filter(|segment| segment.is_axis_aligned())
            .copied()
            .collect::<Vec<_>>();
        Ok(count_overlaps(&axis_aligned).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared).to_string())
    }
}

/// Number of grid points covered by two or more segments
fn count_overlaps(segments: &[Segment]) -> usize {
    segments
        .iter()
        .flat_map(Segment::points)
        .counts()
        .values()
        .filter(|&&count| count >= 2)
        .count()
}
