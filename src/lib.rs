//! # grid_astar
//!
//! Shortest paths on 2D occupancy grids using
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) with 4-directional, unit-cost
//! movement and the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as
//! heuristic.
//!
//! A map is anything implementing [GridMap]: dimensions, an occupancy query and a start and goal.
//! [AstarSolver::find_path](solver::GridSolver::find_path) returns the cells from start to goal,
//! both included, or an empty path if the goal cannot be reached. Endpoints off the map and runs
//! cut short by an expansion budget are errors, never an empty path. Searches keep all of their
//! state locally, so independent searches may share a map across threads.
//!
//! Among frontier entries with equal estimated cost the [TieBreak] policy decides which is
//! expanded first, and insertion order settles the rest. Path lengths never depend on the policy,
//! but the exact route among equally short alternatives does.
//!
//! [OccupancyGrid] is a ready-made map, [generate_random_map] fills one with random obstacles,
//! [render_ascii] and [render_image] draw maps and paths as text or as an image, and [Components]
//! answers reachability queries without searching.
pub mod components;
pub mod config;
pub mod error;
pub mod generator;
pub mod map;
pub mod render;
pub mod search;
pub mod solver;

pub use components::Components;
pub use config::{SolverConfig, TieBreak};
pub use error::{Error, Result};
pub use generator::{generate_random_map, random_free_point};
pub use grid_util::point::Point;
pub use map::{CellType, GridMap, OccupancyGrid};
pub use render::{render_ascii, render_image};
pub use search::SearchOutcome;
pub use solver::astar::{AstarSolver, Heuristic};
pub use solver::{is_valid_path, GridSolver};

/// Cost of a single move between 4-adjacent cells.
pub const UNIT_COST: f64 = 1.0;
