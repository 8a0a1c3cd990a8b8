//! Registration point for completed solvers.
//!
//! Move a generated stub from `<year>/<day>/day<d>_<y>.rs` into this
//! module, declare it below, and register its coordinate.

use crate::solver::SolverRegistry;

pub fn register_all(_registry: &mut SolverRegistry) {
    // _registry.register(2023, 5, || Box::new(day5_2023::Day5Y2023));
}
