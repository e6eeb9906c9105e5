//! Service layer for spendtrack
//!
//! Pure computations over the record sequence: grouping sums and the
//! next-month trend projection. Services take slices rather than the store so
//! one read can feed every aggregate.

pub mod aggregate;
pub mod forecast;
