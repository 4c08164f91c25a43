//! Day 4: Giant Squid
//!
//! Bingo against the squid. The first input block is the comma-separated
//! draw order; every following blank-line-separated block is a board grid.
//! Part 1 scores the first board to win, part 2 the last.

pub mod bingo;

use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use bingo::{Board, play_first_winner, play_last_winner};

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(parts = 2)]
#[puzzle(year = 2021, day = 4, tags = ["2021", "bingo"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Game {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Game;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut blocks = input.trim().split("\n\n");

        let draws = blocks
            .next()
            .ok_or_else(|| ParseError::MissingData("missing draw sequence".to_string()))?
            .split(',')
            .map(|number| {
                number.trim().parse().map_err(|_| {
                    ParseError::InvalidFormat(format!("bad draw number {:?}", number))
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let boards = blocks
            .enumerate()
            .map(|(board_idx, block)| {
                let cells = block
                    .split_whitespace()
                    .map(|number| {
                        number.parse().map_err(|_| {
                            ParseError::InvalidFormat(format!(
                                "(board {}) bad cell number {:?}",
                                board_idx + 1,
                                number
                            ))
                        })
                    })
                    .collect::<Result<Vec<u32>, _>>()?;
                Board::new(cells).map_err(|e| {
                    ParseError::InvalidFormat(format!("(board {}) {}", board_idx + 1, e))
                })
            })
            .collect::<Result<Vec<Board>, _>>()?;

        if boards.is_empty() {
            return Err(ParseError::MissingData("no boards in input".to_string()));
        }

        Ok(Game { draws, boards })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        play_first_winner(shared.boards.clone(), &shared.draws)
            .map(|score| score.to_string())
            .map_err(SolveError::failed)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        play_last_winner(shared.boards.clone(), &shared.draws)
            .map(|score| score.to_string())
            .map_err(SolveError::failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

    #[test]
    fn parses_example_game() {
        let game = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(game.draws.len(), 27);
        assert_eq!(game.boards.len(), 3);
        assert_eq!(game.boards[0].size(), 5);
    }

    #[test]
    fn example_first_winner() {
        // Third board wins on draw 24 with unmarked sum 188
        let mut game = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut game).unwrap(), "4512");
    }

    #[test]
    fn example_last_winner() {
        // Second board wins last, on draw 13 with unmarked sum 148
        let mut game = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut game).unwrap(), "1924");
    }

    #[test]
    fn no_winner_is_reported_not_defaulted() {
        let mut game = Solver::parse("1,2\n\n1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 16").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut game),
            Err(SolveError::SolveFailed(_))
        ));
        assert!(matches!(
            <Solver as PartSolver<2>>::solve(&mut game),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn rejects_non_square_board() {
        assert!(Solver::parse("1,2\n\n1 2 3").is_err());
    }

    #[test]
    fn rejects_missing_boards() {
        assert!(Solver::parse("1,2,3").is_err());
    }
}
