//! Solver registry: flat year/day-indexed storage plus plugin collection

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::DynSolver;

/// First year of Advent of Code
pub const BASE_YEAR: u16 = 2015;
/// Number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Immutable storage for solver factories with O(1) lookup
///
/// A flat Vec indexed by `(year - BASE_YEAR) * DAYS_PER_YEAR + (day - 1)`.
pub struct SolverStorage {
    entries: Vec<Option<RegistryEntry>>,
}

impl SolverStorage {
    /// Iterate over metadata for all registered solvers, in year/day order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                SolverInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get metadata for a specific solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| SolverInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Builder for constructing a [`SolverRegistry`] with duplicate detection
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<RegistryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with an explicit parts count
    ///
    /// Returns an error if year/day is out of bounds or already registered.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(RegistryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register all solver plugins submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// // Register only 2021 solvers tagged "bingo"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.year == 2021 && plugin.tags.contains(&"bingo"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    storage: SolverStorage,
}

impl SolverRegistry {
    /// Get readonly access to the storage for iteration/lookup
    pub fn storage(&self) -> &SolverStorage {
        &self.storage
    }

    /// Create a solver instance by invoking the factory for a specific year/day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed and created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// A type-erased interface with no associated types, so different solver
/// types can be collected in a single plugin container. Implemented for all
/// [`Solver`](crate::Solver) types through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(crate::instance::SolverInstance::<S>::new(
                year, day, input,
            )?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted via `inventory::submit!`, usually through the
/// `AutoRegisterSolver` derive macro:
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[puzzle_solver(parts = 2)]
/// #[puzzle(year = 2021, day = 4, tags = ["bingo"])]
/// pub struct Solver;
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g. "2021", "bingo")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a registry builder by hand
///
/// Useful in tests and tools that build registries without the plugin
/// system.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver, register_solver};
///
/// struct MySolver;
///
/// impl PuzzleParser for MySolver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MySolver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok("42".to_string())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, MySolver, 2021, 1);
/// let registry = builder.build();
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                |input: &str| {
                    Ok(Box::new($crate::SolverInstance::<$solver>::new(
                        $year, $day, input,
                    )?))
                },
            )
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_index_bounds() {
        assert_eq!(calc_index(BASE_YEAR, 1), Some(0));
        assert_eq!(calc_index(BASE_YEAR, 25), Some(24));
        assert_eq!(calc_index(BASE_YEAR + 1, 1), Some(25));
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2021, 0), None);
        assert_eq!(calc_index(2021, 26), None);
    }

    #[test]
    fn test_index_roundtrip() {
        for index in [0, 24, 25, CAPACITY - 1] {
            let (year, day) = from_index(index);
            assert_eq!(calc_index(year, day), Some(index));
        }
    }
}
