use grid_astar::{
    generate_random_map, is_valid_path, random_free_point, AstarSolver, CellType, Error, GridMap,
    GridSolver, OccupancyGrid, Point, SolverConfig,
};
use rand::prelude::*;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn grid_with(w: usize, h: usize, obstacles: &[(i32, i32)], start: Point, goal: Point) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(w, h);
    for &(x, y) in obstacles {
        grid.set_cell(p(x, y), CellType::Obstacle).unwrap();
    }
    grid.set_start(start).unwrap();
    grid.set_goal(goal).unwrap();
    grid
}

#[test]
fn corridor_five_by_one() {
    let grid = grid_with(5, 1, &[], p(0, 0), p(4, 0));
    let path = AstarSolver::new().find_path(&grid).unwrap();
    assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(4, 0)]);
}

#[test]
fn single_opening_in_column() {
    let grid = grid_with(3, 3, &[(1, 0), (1, 2)], p(0, 1), p(2, 1));
    let path = AstarSolver::new().find_path(&grid).unwrap();
    assert_eq!(path, vec![p(0, 1), p(1, 1), p(2, 1)]);
}

#[test]
fn fully_blocking_column() {
    let grid = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)], p(0, 1), p(2, 1));
    assert!(AstarSolver::new().find_path(&grid).unwrap().is_empty());
}

#[test]
fn disconnected_regions() {
    // S.#..
    // ..#..
    // ###..
    // ....G
    let grid = OccupancyGrid::from_ascii("S.#..\n..#..\n###..\n....G").unwrap();
    assert_eq!(AstarSolver::new().find_path(&grid).unwrap(), Vec::<Point>::new());
}

/// A second query on the same map with fresh endpoints, as the demo does.
#[test]
fn second_query_on_same_map() {
    let mut rng = StdRng::seed_from_u64(11);
    let grid = generate_random_map(40, 40, 0.2, &mut rng).unwrap();
    let solver = AstarSolver::new();
    let start = random_free_point(&grid, &mut rng, &[]).unwrap();
    let goal = random_free_point(&grid, &mut rng, &[start]).unwrap();
    let path = solver.find_path_between(&grid, start, goal).unwrap();
    if let (Some(first), Some(last)) = (path.first(), path.last()) {
        assert_eq!(*first, start);
        assert_eq!(*last, goal);
    }
}

/// Independent searches share one read-only map across threads.
#[test]
fn concurrent_searches_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    let grid = generate_random_map(60, 60, 0.25, &mut rng).unwrap();
    let solver = AstarSolver::new();
    let expected = solver.find_path(&grid).unwrap();
    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| solver.find_path(&grid).unwrap()))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    if !expected.is_empty() {
        assert!(is_valid_path(&grid, &expected));
    }
}

#[test]
fn budgeted_search_is_all_or_nothing() {
    let grid = grid_with(50, 1, &[], p(0, 0), p(49, 0));
    let tight = AstarSolver::with_config(SolverConfig::default().with_max_expansions(10));
    assert!(matches!(
        tight.find_path(&grid),
        Err(Error::Incomplete { expanded: 10 })
    ));
    let enough = AstarSolver::with_config(SolverConfig::default().with_max_expansions(50));
    assert_eq!(enough.find_path(&grid).unwrap().len(), 50);
}

#[test]
fn search_reports_work() {
    let grid = grid_with(5, 1, &[], p(0, 0), p(4, 0));
    let outcome = AstarSolver::new()
        .search(&grid, grid.start(), grid.goal())
        .unwrap();
    assert_eq!(outcome.cost, 4.0);
    assert_eq!(outcome.expanded, 5);
    assert_eq!(outcome.pushed, 5);
}
