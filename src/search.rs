//! A* over the cells of a [GridMap]. Bookkeeping lives in flat arrays indexed by the row-major cell
//! index, and the frontier uses lazy deletion: improved entries are pushed again and stale ones are
//! skipped when popped, so no decrease-key operation is needed.
use crate::config::{SolverConfig, TieBreak};
use crate::error::{Error, Result};
use crate::map::GridMap;
use grid_util::point::Point;
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder {
    estimated_cost: f64,
    tie_key: f64,
    sequence: usize,
    index: usize,
}

impl SmallestCostHolder {
    fn new(cost: f64, heuristic: f64, tie_break: TieBreak, sequence: usize, index: usize) -> Self {
        let tie_key = match tie_break {
            TieBreak::PreferLargerCost => cost,
            TieBreak::PreferSmallerCost => -cost,
            TieBreak::InsertionOrder => 0.0,
        };
        SmallestCostHolder {
            estimated_cost: cost + heuristic,
            tie_key,
            sequence,
            index,
        }
    }
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimated cost must compare greatest. Among equal
        // estimates the larger tie key wins, then the earliest insertion.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| self.tie_key.total_cmp(&other.tie_key))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Start-to-goal path, or [None] if the goal cannot be reached.
    pub path: Option<Vec<Point>>,
    /// Cost of the path, infinite if there is none.
    pub cost: f64,
    /// Number of cells closed.
    pub expanded: usize,
    /// Number of frontier insertions, stale ones included.
    pub pushed: usize,
}

fn reverse_path<M: GridMap + ?Sized>(map: &M, parents: &[usize], goal_ix: usize) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(Some(goal_ix), |&i| {
        (parents[i] != NO_PARENT).then(|| parents[i])
    })
    .map(|i| map.point_at(i))
    .collect();
    path.reverse();
    path
}

/// Searches from `start` to `goal`, failing with [Error::OutOfBounds] if either lies off `map`.
/// `successors` yields the cells reachable in one move together with the move cost, and
/// `heuristic` estimates the remaining cost to `goal`. The path is optimal when the heuristic is
/// admissible and consistent.
///
/// Returns [Error::Incomplete] if `config.max_expansions` is reached first; no partial path is
/// produced in that case.
pub fn astar_grid<M, FN, IN, FH>(
    map: &M,
    start: Point,
    goal: Point,
    mut successors: FN,
    mut heuristic: FH,
    config: &SolverConfig,
) -> Result<SearchOutcome>
where
    M: GridMap + ?Sized,
    FN: FnMut(&Point) -> IN,
    IN: IntoIterator<Item = (Point, f64)>,
    FH: FnMut(&Point) -> f64,
{
    for p in [start, goal] {
        if !map.in_bounds(p) {
            return Err(Error::OutOfBounds {
                x: p.x,
                y: p.y,
                width: map.width(),
                height: map.height(),
            });
        }
    }
    let n_cells = map.width() * map.height();
    let mut best_cost = vec![f64::INFINITY; n_cells];
    let mut visited = vec![false; n_cells];
    let mut parents = vec![NO_PARENT; n_cells];

    let start_ix = map.get_ix_point(&start);
    let goal_ix = map.get_ix_point(&goal);
    best_cost[start_ix] = 0.0;

    let mut to_see = BinaryHeap::new();
    let mut pushed = 0;
    to_see.push(SmallestCostHolder::new(
        0.0,
        heuristic(&start),
        config.tie_break,
        pushed,
        start_ix,
    ));
    pushed += 1;

    let mut expanded = 0;
    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        // We may have inserted a cell several times if we found a better way to reach it. The
        // first pop closes it with its final cost and the others are discarded.
        if visited[index] {
            continue;
        }
        if let Some(limit) = config.max_expansions {
            if expanded >= limit {
                warn!(
                    "Expansion budget of {} exhausted searching from {} to {}",
                    limit, start, goal
                );
                return Err(Error::Incomplete { expanded });
            }
        }
        visited[index] = true;
        expanded += 1;

        let cost = best_cost[index];
        if index == goal_ix {
            let path = reverse_path(map, &parents, index);
            debug!(
                "Found path from {} to {} with cost {} ({} expanded, {} pushed)",
                start, goal, cost, expanded, pushed
            );
            return Ok(SearchOutcome {
                path: Some(path),
                cost,
                expanded,
                pushed,
            });
        }

        let node = map.point_at(index);
        trace!("Expanding {} with cost {}", node, cost);
        for (successor, move_cost) in successors(&node) {
            if !map.in_bounds(successor) {
                continue;
            }
            let successor_ix = map.get_ix_point(&successor);
            if visited[successor_ix] {
                continue;
            }
            let new_cost = cost + move_cost;
            if new_cost < best_cost[successor_ix] {
                best_cost[successor_ix] = new_cost;
                parents[successor_ix] = index;
                to_see.push(SmallestCostHolder::new(
                    new_cost,
                    heuristic(&successor),
                    config.tie_break,
                    pushed,
                    successor_ix,
                ));
                pushed += 1;
            }
        }
    }
    debug!(
        "No path from {} to {} ({} expanded, {} pushed)",
        start, goal, expanded, pushed
    );
    Ok(SearchOutcome {
        path: None,
        cost: f64::INFINITY,
        expanded,
        pushed,
    })
}
