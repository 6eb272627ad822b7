//! Path search for grid-based arena agents.
//!
//! This crate computes obstacle-avoiding routes across the bounded arena
//! described by [`skirm_core`]:
//!
//! - **Greedy best-first search** ([`PathFinder::find_path`]) — expands the
//!   frontier cell closest to the goal by Manhattan distance. Fast and good
//!   enough for a per-tick decision loop, but *not* a shortest-path
//!   guarantee.
//! - **Distance helpers** ([`manhattan`], [`chebyshev`]).
//!
//! Walls and fences are both impassable; every cell within Manhattan
//! distance [`CLEARANCE`] of either is treated as blocked, approximating the
//! agent's physical size without exact collision geometry.

mod distance;
mod greedy;

pub use distance::{chebyshev, manhattan};
pub use greedy::{CLEARANCE, PathFinder, find_path};
