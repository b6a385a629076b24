//! Polar (angle, radius) vote accumulator.
//!
//! Cells are indexed by angle step `t` and radius bin `r`; the radius axis
//! spans `[-max_radius, max_radius)` with `max_radius = ceil(hypot(w, h))`.
//! Cells are only ever incremented, and population finishes before any line
//! extraction reads them.

pub mod accumulator;
pub mod voting;

pub use accumulator::{max_radius_for, Accumulator, AccumulatorPeak};
pub use voting::{populate, populate_parallel, VoteStats};
