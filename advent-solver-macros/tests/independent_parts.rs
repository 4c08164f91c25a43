use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError, Solver, SolverExt};
use advent_solver_macros::PuzzleSolver;

#[derive(PuzzleSolver)]
#[puzzle_solver(parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn test_parts_constant_from_attribute() {
    assert_eq!(TestSolver::PARTS, 2);
}

#[test]
fn test_solve_part_dispatches_to_part_impls() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result1 = <TestSolver as Solver>::solve_part(&mut shared, 1).unwrap();
    assert_eq!(result1, "6");

    let result2 = <TestSolver as Solver>::solve_part(&mut shared, 2).unwrap();
    assert_eq!(result2, "6");
}

#[test]
fn test_undeclared_part_is_not_implemented() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result = <TestSolver as Solver>::solve_part(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));

    let result = <TestSolver as Solver>::solve_part(&mut shared, 0);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(0))));
}

#[test]
fn test_checked_solve_rejects_out_of_range() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part_checked(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));

    let result = TestSolver::solve_part_checked(&mut shared, 1);
    assert_eq!(result.unwrap(), "6");
}
