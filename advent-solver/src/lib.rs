//! Advent of Code solver framework
//!
//! A type-safe framework for running Advent of Code puzzle solvers across
//! years and days. Each puzzle is a solver with custom input parsing that
//! produces answers for one or more parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with parsing separated from solving
//! - Per-part impls validated at compile time via const generics
//! - A registry keyed by (year, day) with plugin-based auto-registration
//! - Parse and solve timing on every run
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{
//!     ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError, register_solver,
//! };
//! use advent_solver::PuzzleSolver;
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(parts = 1)]
//! pub struct MyDay1;
//!
//! impl PuzzleParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, MyDay1, 2021, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n2\n3").unwrap();
//! let outcome = solver.solve(1).unwrap();
//! assert_eq!(outcome.answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver traits
//!
//! [`PuzzleParser`] defines the `SharedData` type and `parse()`.
//! [`PartSolver<N>`] implements one part against that shared data; the
//! `#[derive(PuzzleSolver)]` macro generates the dispatching [`Solver`]
//! impl from them. Shared data is mutable so parts can memoize common
//! computation.
//!
//! ## DynSolver
//!
//! [`DynSolver`] type-erases a parsed [`SolverInstance`] so the registry
//! and runner can treat all solvers uniformly.
//!
//! ## Plugin registration
//!
//! `#[derive(AutoRegisterSolver)]` submits a solver to the `inventory`
//! plugin registry:
//!
//! ```ignore
//! #[derive(PuzzleSolver, AutoRegisterSolver)]
//! #[puzzle_solver(parts = 2)]
//! #[puzzle(year = 2021, day = 4, tags = ["bingo"])]
//! struct Solver;
//! ```
//!
//! The runner then builds its registry with
//! [`RegistryBuilder::register_all_plugins`] or filters by tag with
//! [`RegistryBuilder::register_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveOutcome, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
    SolverStorage,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{AutoRegisterSolver, PuzzleSolver};
