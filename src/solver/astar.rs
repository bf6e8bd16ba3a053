use grid_util::point::Point;

use crate::{config::SolverConfig, solver::GridSolver, UNIT_COST};

/// Distance estimates available to [AstarSolver]. Both are admissible for 4-directional unit-cost
/// movement; Manhattan is also exact on an empty grid and therefore the tighter bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn distance(self, p1: &Point, p2: &Point) -> f64 {
        let delta_x = (p1.x - p2.x).abs() as f64;
        let delta_y = (p1.y - p2.y).abs() as f64;
        match self {
            Heuristic::Manhattan => delta_x + delta_y,
            Heuristic::Euclidean => delta_x.hypot(delta_y),
        }
    }
}

/// A* with 4-directional unit-cost moves.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
    /// Multiplies every estimate. Values above 1.0 trade optimality for fewer expansions.
    pub heuristic_factor: f64,
    pub config: SolverConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> AstarSolver {
        AstarSolver {
            heuristic: Heuristic::Manhattan,
            heuristic_factor: 1.0,
            config,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// The distance in moves times the unit cost and the heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        self.heuristic.distance(p1, p2) * UNIT_COST * self.heuristic_factor
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }
}
