//! Advent of Code 2021 puzzle solutions with automatic registration
//!
//! Each day is a self-contained module: parse the day's text input into
//! shared data, then solve part 1 and part 2 against it. Solvers register
//! themselves with the framework through the `AutoRegisterSolver` derive
//! macro.

pub mod year_2021;
