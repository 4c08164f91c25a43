//! Day 2: Dive!
//!
//! Dead-reckoning for the submarine. Part 1 reads `down`/`up` as depth
//! changes; part 2 reads them as aim changes, with `forward` descending by
//! `aim * distance`. Both answer with `horizontal * depth`.

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use anyhow::anyhow;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 2, tags = ["2021", "submarine"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| -> Result<Command, anyhow::Error> {
                let (command, amount) = line
                    .trim()
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("expected '<command> <amount>', got {:?}", line))?;
                let amount: i64 = amount.parse()?;
                match command {
                    "forward" => Ok(Command::Forward(amount)),
                    "down" => Ok(Command::Down(amount)),
                    "up" => Ok(Command::Up(amount)),
                    _ => Err(anyhow!("unknown command {:?}", command)),
                }
            })
            .enumerate()
            .map(|(line_idx, res)| {
                res.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut horizontal, mut depth) = (0i64, 0i64);
        for command in shared.iter() {
            match command {
                Command::Forward(n) => horizontal += n,
                Command::Down(n) => depth += n,
                Command::Up(n) => depth -= n,
            }
        }
        Ok((horizontal * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut horizontal, mut depth, mut aim) = (0i64, 0i64, 0i64);
        for command in shared.iter() {
            match command {
                Command::Forward(n) => {
                    horizontal += n;
                    depth += aim * n;
                }
                Command::Down(n) => aim += n,
                Command::Up(n) => aim -= n,
            }
        }
        Ok((horizontal * depth).to_string())
    }
}
