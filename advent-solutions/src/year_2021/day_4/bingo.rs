//! Bingo board win/score engine
//!
//! Owns board state, applies successive number draws, detects per-board
//! victory (a completed row or column), computes board scores, and runs the
//! two whole-game strategies over an ordered draw sequence: first board to
//! win and last board to win.
//!
//! Everything here is single-threaded and deterministic. Draws replay
//! strictly in input order because score and win-order depend entirely on
//! draw position.

use thiserror::Error;

/// Error type for the bingo engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BingoError {
    /// A board was constructed from a cell count that is not a square
    #[error("board has {0} cells, which is not a positive square grid")]
    NonSquareBoard(usize),
    /// A score was requested before any draw was applied to the board
    #[error("score requested before any draw was applied")]
    ScoreBeforeDraw,
    /// The draw sequence was exhausted without any board winning
    #[error("draw sequence exhausted with no winning board")]
    NoWinner,
}

/// A square bingo board: a row-major grid of numbers with a parallel mark
/// bitset
///
/// The winning line index sets (rows and columns) are precomputed at
/// construction since [`Board::has_won`] runs once per draw per board.
#[derive(Debug, Clone)]
pub struct Board {
    numbers: Vec<u32>,
    marked: Vec<bool>,
    size: usize,
    last_drawn: Option<u32>,
    lines: Vec<Vec<usize>>,
}

impl Board {
    /// Construct a board from a row-major flattened grid
    ///
    /// The cell count must be a positive perfect square; anything else is
    /// the loader's bug and is rejected here.
    pub fn new(numbers: Vec<u32>) -> Result<Self, BingoError> {
        let size = numbers.len().isqrt();
        if size == 0 || size * size != numbers.len() {
            return Err(BingoError::NonSquareBoard(numbers.len()));
        }

        let rows = (0..size).map(|r| (r * size..(r + 1) * size).collect());
        let columns = (0..size).map(|c| (0..size).map(|r| c + r * size).collect());
        let lines = rows.chain(columns).collect();

        let marked = vec![false; numbers.len()];
        Ok(Self {
            numbers,
            marked,
            size,
            last_drawn: None,
            lines,
        })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// The most recent number marked on this board, if any draw hit it yet
    pub fn last_drawn(&self) -> Option<u32> {
        self.last_drawn
    }

    /// Apply one drawn number to the board
    ///
    /// Marks the number and records it as the last drawn if present. A
    /// number not on the board leaves the board unchanged; that is the
    /// normal case since draws are global and boards are partial.
    pub fn apply_draw(&mut self, number: u32) {
        if let Some(index) = self.numbers.iter().position(|&n| n == number) {
            self.marked[index] = true;
            self.last_drawn = Some(number);
        }
    }

    /// Whether any full row or column is marked
    ///
    /// Monotonic: marks are never removed, so once true it stays true.
    pub fn has_won(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.iter().all(|&index| self.marked[index]))
    }

    /// Sum of unmarked numbers times the last drawn number
    ///
    /// Calling this before any draw has been applied is a caller bug and
    /// returns [`BingoError::ScoreBeforeDraw`] rather than a silent default.
    pub fn score(&self) -> Result<u32, BingoError> {
        let last_drawn = self.last_drawn.ok_or(BingoError::ScoreBeforeDraw)?;
        let unmarked: u32 = self
            .numbers
            .iter()
            .zip(&self.marked)
            .filter(|&(_, &marked)| !marked)
            .map(|(&number, _)| number)
            .sum();
        Ok(unmarked * last_drawn)
    }
}

/// Play until the first board wins and return its score
///
/// Each draw is applied to every board before any victory check, so all
/// boards see the same draw position. If several boards complete a line on
/// the same draw, the one earliest in board order is chosen; the tie-break
/// is implementation-defined. Exhausting the draws without a winner is a
/// fatal [`BingoError::NoWinner`].
pub fn play_first_winner(mut boards: Vec<Board>, draws: &[u32]) -> Result<u32, BingoError> {
    for &draw in draws {
        for board in &mut boards {
            board.apply_draw(draw);
        }
        if let Some(winner) = boards.iter().find(|board| board.has_won()) {
            return winner.score();
        }
    }
    Err(BingoError::NoWinner)
}

/// Play until every board has won (or draws run out) and return the last
/// winner's score
///
/// Newly won boards leave the in-play set after each draw; the score of the
/// board removed most recently is the running "last winner". Boards that
/// finish on the same draw resolve by board order, with the last in
/// iteration order recorded; that tie-break is implementation-defined. If
/// no board ever wins the result is [`BingoError::NoWinner`].
pub fn play_last_winner(mut boards: Vec<Board>, draws: &[u32]) -> Result<u32, BingoError> {
    let mut last_score = None;
    for &draw in draws {
        if boards.is_empty() {
            break;
        }
        for board in &mut boards {
            board.apply_draw(draw);
        }
        for winner in boards.iter().filter(|board| board.has_won()) {
            last_score = Some(winner.score()?);
        }
        boards.retain(|board| !board.has_won());
    }
    last_score.ok_or(BingoError::NoWinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(numbers: &[u32]) -> Board {
        Board::new(numbers.to_vec()).unwrap()
    }

    #[test]
    fn single_cell_board_wins_once_its_number_is_drawn() {
        let mut board = board(&[1]);
        assert!(!board.has_won());
        board.apply_draw(1);
        assert!(board.has_won());
    }

    #[test]
    fn one_marked_cell_is_not_a_win_on_a_two_by_two() {
        let mut board = board(&[1, 2, 3, 4]);
        board.apply_draw(1);
        assert!(!board.has_won());
    }

    #[test]
    fn completed_row_wins() {
        let mut board = board(&[1, 2, 3, 4]);
        board.apply_draw(1);
        board.apply_draw(2);
        assert!(board.has_won());
    }

    #[test]
    fn completed_column_wins() {
        let mut board = board(&[1, 2, 3, 4]);
        board.apply_draw(1);
        board.apply_draw(3);
        assert!(board.has_won());
    }

    #[test]
    fn absent_draw_is_ignored() {
        let mut board = board(&[1, 2, 3, 4]);
        board.apply_draw(99);
        assert!(!board.has_won());
        assert_eq!(board.last_drawn(), None);
    }

    #[test]
    fn score_is_unmarked_sum_times_last_drawn() {
        let mut board = board(&[1, 2, 3, 4]);
        board.apply_draw(1);
        assert_eq!(board.score(), Ok(9));
    }

    #[test]
    fn score_before_any_draw_is_an_error() {
        let board = board(&[1, 2, 3, 4]);
        assert_eq!(board.score(), Err(BingoError::ScoreBeforeDraw));
    }

    #[test]
    fn non_square_grid_is_rejected() {
        assert!(matches!(
            Board::new(vec![1, 2, 3]),
            Err(BingoError::NonSquareBoard(3))
        ));
        assert!(matches!(
            Board::new(vec![]),
            Err(BingoError::NonSquareBoard(0))
        ));
    }

    #[test]
    fn first_winner_scores_at_the_winning_draw() {
        let boards = vec![board(&[1, 2, 3, 4])];
        assert_eq!(play_first_winner(boards, &[1, 2]), Ok((3 + 4) * 2));
    }

    #[test]
    fn last_winner_uses_its_own_completing_draw() {
        // First board finishes its row on draw 3, second on draw 5
        let boards = vec![board(&[1, 3, 10, 11]), board(&[2, 5, 20, 21])];
        let draws = [1, 2, 3, 4, 5];
        // Second board: unmarked 20 + 21, completed by drawing 5
        assert_eq!(play_last_winner(boards, &draws), Ok((20 + 21) * 5));
    }

    #[test]
    fn first_winner_without_any_win_is_fatal() {
        let boards = vec![board(&[1, 2, 3, 4])];
        assert_eq!(play_first_winner(boards, &[1, 4]), Err(BingoError::NoWinner));
    }

    #[test]
    fn last_winner_without_any_win_is_fatal() {
        let boards = vec![board(&[1, 2, 3, 4])];
        assert_eq!(play_last_winner(boards, &[1, 4]), Err(BingoError::NoWinner));
    }

    #[test]
    fn simultaneous_finishers_record_the_later_board() {
        // Both boards complete a row on draw 2; board order decides
        let boards = vec![board(&[1, 2, 10, 11]), board(&[1, 2, 20, 21])];
        assert_eq!(play_last_winner(boards, &[1, 2]), Ok((20 + 21) * 2));
    }

    #[test]
    fn board_winning_with_its_last_opponent_still_counts_as_last() {
        // Board 0 wins on draw 2; boards 1 and 2 both finish on draw 4
        let boards = vec![
            board(&[1, 2, 10, 11]),
            board(&[3, 4, 30, 31]),
            board(&[3, 4, 40, 41]),
        ];
        assert_eq!(play_last_winner(boards, &[1, 2, 3, 4]), Ok((40 + 41) * 4));
    }

    proptest! {
        /// Once a board has won, further draws never unwin it
        #[test]
        fn has_won_is_monotonic(
            numbers in proptest::collection::vec(0u32..100, 9),
            draws in proptest::collection::vec(0u32..100, 0..40),
        ) {
            // Dedup cell values; boards hold distinct numbers
            let mut cells = numbers;
            cells.sort_unstable();
            cells.dedup();
            prop_assume!(cells.len() >= 9);
            let mut board = Board::new(cells[..9].to_vec()).unwrap();

            let mut won = false;
            for draw in draws {
                board.apply_draw(draw);
                let now = board.has_won();
                prop_assert!(!won || now, "board unwon after drawing {}", draw);
                won = now;
            }
        }

        /// Scores stay defined once any on-board number has been drawn
        #[test]
        fn score_defined_after_first_hit(first in 0u32..4, rest in proptest::collection::vec(0u32..100, 0..20)) {
            let mut board = board(&[0, 1, 2, 3]);
            board.apply_draw(first);
            prop_assert!(board.score().is_ok());
            for draw in rest {
                board.apply_draw(draw);
                prop_assert!(board.score().is_ok());
            }
        }
    }
}
