//! Integration tests for registry construction, lookup, and solving

use advent_solver::{
    ParseError, PuzzleParser, RegistrationError, RegistryBuilder, SolveError, Solver, SolverError,
    SolverInstance, register_solver,
};

struct SumSolver;

impl PuzzleParser for SumSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl Solver for SumSolver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().sum::<i64>().to_string()),
            2 => Ok(shared.iter().product::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[test]
fn test_manual_registration_and_solving() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, SumSolver, 2021, 1);
    let registry = builder.build();

    let mut solver = registry
        .create_solver(2021, 1, "2\n3\n4")
        .expect("Failed to create solver");

    assert_eq!(solver.year(), 2021);
    assert_eq!(solver.day(), 1);
    assert_eq!(solver.parts(), 2);

    let outcome1 = solver.solve(1).expect("Failed to solve part 1");
    assert_eq!(outcome1.answer, "9");

    let outcome2 = solver.solve(2).expect("Failed to solve part 2");
    assert_eq!(outcome2.answer, "24");
}

#[test]
fn test_unregistered_day_is_not_found() {
    let registry = RegistryBuilder::new().build();
    let result = registry.create_solver(2021, 1, "");
    assert!(matches!(result, Err(SolverError::NotFound(2021, 1))));
}

#[test]
fn test_out_of_bounds_year_day_rejected() {
    let registry = RegistryBuilder::new().build();
    assert!(matches!(
        registry.create_solver(2014, 1, ""),
        Err(SolverError::InvalidYearDay(2014, 1))
    ));
    assert!(matches!(
        registry.create_solver(2021, 26, ""),
        Err(SolverError::InvalidYearDay(2021, 26))
    ));
    assert!(matches!(
        registry.create_solver(2021, 0, ""),
        Err(SolverError::InvalidYearDay(2021, 0))
    ));
}

#[test]
fn test_duplicate_registration_rejected() {
    let builder = RegistryBuilder::new()
        .register(2021, 1, SumSolver::PARTS, |input: &str| {
            Ok(Box::new(SolverInstance::<SumSolver>::new(2021, 1, input)?))
        })
        .unwrap();

    let result = builder.register(2021, 1, SumSolver::PARTS, |input: &str| {
        Ok(Box::new(SolverInstance::<SumSolver>::new(2021, 1, input)?))
    });
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2021, 1))
    ));
}

#[test]
fn test_parse_failure_surfaces_as_solver_error() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, SumSolver, 2021, 1);
    let registry = builder.build();

    let result = registry.create_solver(2021, 1, "not a number");
    assert!(matches!(result, Err(SolverError::ParseError(_))));
}

#[test]
fn test_storage_iteration_in_year_day_order() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, SumSolver, 2022, 3);
    register_solver!(builder, SumSolver, 2021, 7);
    register_solver!(builder, SumSolver, 2021, 2);
    let registry = builder.build();

    let storage = registry.storage();
    assert_eq!(storage.len(), 3);
    assert!(!storage.is_empty());
    assert!(storage.contains(2021, 2));
    assert!(!storage.contains(2021, 3));

    let infos: Vec<(u16, u8, u8)> = storage
        .iter_info()
        .map(|info| (info.year, info.day, info.parts))
        .collect();
    assert_eq!(infos, vec![(2021, 2, 2), (2021, 7, 2), (2022, 3, 2)]);
}

#[test]
fn test_timing_is_recorded() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, SumSolver, 2021, 1);
    let registry = builder.build();

    let mut solver = registry.create_solver(2021, 1, "1\n2").unwrap();
    assert!(solver.parse_duration().num_nanoseconds().unwrap_or(0) >= 0);
    assert!(solver.parse_end() >= solver.parse_start());

    let outcome = solver.solve(1).unwrap();
    assert!(outcome.solve_end >= outcome.solve_start);
    assert!(outcome.duration().num_nanoseconds().unwrap_or(0) >= 0);
}
