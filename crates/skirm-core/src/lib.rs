//! **skirm-core** — Grid arena agent SDK (core types).
//!
//! This crate provides the passive data the rest of the *skirm* ecosystem
//! consumes: geometry primitives and the per-tick environment snapshot
//! describing walls, fences, and bullets. All logic lives in the companion
//! crates; these types only carry state.

pub mod env;
pub mod geom;

pub use env::{Bullet, EnvironmentInfo, Fence, MAP_SIZE, Obstacle, Wall};
pub use geom::{Point, Range};
