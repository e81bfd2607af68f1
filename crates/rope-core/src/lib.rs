//! Verlet rope solver.
//!
//! A chain of point masses tethered between two moving anchors, advanced once
//! per fixed tick by Verlet integration followed by a Gauss-Seidel sweep over
//! the segment-length constraints. The simulation is planar (x, y); the third
//! axis of every position is carried through untouched.

pub mod batch;
pub mod chain;
pub mod config;
pub mod constraints;
pub mod error;
pub mod math;
pub mod render;
pub mod rope;
pub mod solver;
pub mod timestep;

pub use chain::{ChainState, Node};
pub use config::RopeConfig;
pub use error::{ConfigError, Result};
pub use rope::{AnchorProvider, Anchors, Rope, RopeRenderer, TickOutcome};
pub use solver::Solver;
