//! Daily puzzle selection.
//!
//! Every calendar date maps to one target station, and to one
//! origin/destination pair for the route game. The mapping is a pure
//! function of the catalog, the date and [`DailyConfig`], so any client can
//! recompute (or audit) the published schedule.

mod config;
mod prng;
mod selector;

pub use config::DailyConfig;
pub use prng::Mulberry32;
pub use selector::{DailyAssignment, DailyError, DailyRoute, DailySelector};
