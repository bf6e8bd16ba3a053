use crate::config::SolverConfig;
use crate::error::Result;
use crate::map::GridMap;
use crate::search::{astar_grid, SearchOutcome};
use crate::UNIT_COST;
use grid_util::point::Point;
use itertools::Itertools;
use smallvec::SmallVec;

pub mod astar;

/// Checks that `path` runs from the map's start to its goal through traversable cells, each step
/// moving by exactly one unit along exactly one axis.
pub fn is_valid_path<M: GridMap + ?Sized>(map: &M, path: &[Point]) -> bool {
    match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => {
            first == map.start()
                && last == map.goal()
                && path.iter().all(|p| map.can_move_to(*p))
                && path
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1)
        }
        _ => false,
    }
}

pub trait GridSolver {
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64;

    fn config(&self) -> &SolverConfig;

    /// Moves out of `node` with their costs. The default allows unit-cost steps to the traversable
    /// 4-neighbours; weighted terrain or other movement models override this.
    fn successors<M: GridMap + ?Sized>(
        &self,
        map: &M,
        node: &Point,
    ) -> SmallVec<[(Point, f64); 4]> {
        map.neighborhood(*node)
            .into_iter()
            .map(|p| (p, UNIT_COST))
            .collect()
    }

    /// Runs the search and reports how much work it took. Fails with
    /// [Error::OutOfBounds](crate::Error::OutOfBounds) if either endpoint lies off the map.
    fn search<M: GridMap + ?Sized>(
        &self,
        map: &M,
        start: Point,
        goal: Point,
    ) -> Result<SearchOutcome> {
        astar_grid(
            map,
            start,
            goal,
            |node| self.successors(map, node),
            |point| self.heuristic(point, &goal),
            self.config(),
        )
    }

    /// Like [find_path](Self::find_path) with an explicit start and goal instead of the ones
    /// stored on the map.
    fn find_path_between<M: GridMap + ?Sized>(
        &self,
        map: &M,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>> {
        Ok(self.search(map, start, goal)?.path.unwrap_or_default())
    }

    /// Computes the shortest path from the map's start to its goal, both included. `Ok` with an
    /// empty path means the goal cannot be reached. An endpoint off the map fails with
    /// [Error::OutOfBounds](crate::Error::OutOfBounds) and an exhausted expansion budget with
    /// [Error::Incomplete](crate::Error::Incomplete), so neither is mistaken for a missing path.
    fn find_path<M: GridMap + ?Sized>(&self, map: &M) -> Result<Vec<Point>> {
        self.find_path_between(map, map.start(), map.goal())
    }

    /// Cost of following `path` with unit-cost moves. Empty and single-cell paths cost nothing.
    fn path_cost(&self, path: &[Point]) -> f64 {
        path.len().saturating_sub(1) as f64 * UNIT_COST
    }
}
