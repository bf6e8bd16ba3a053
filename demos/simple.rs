use grid_astar::{AstarSolver, GridSolver, OccupancyGrid};

// In this example a path is found on a 5x5 grid with shape
// S....
// .###.
// .#...
// .#.#.
// ...#G
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

fn main() -> grid_astar::Result<()> {
    let grid = OccupancyGrid::from_ascii("S....\n.###.\n.#...\n.#.#.\n...#G")?;
    let solver = AstarSolver::new();
    let path = solver.find_path(&grid)?;
    if path.is_empty() {
        println!("No path found!");
    } else {
        println!("A path has been found:");
        for p in &path {
            println!("{:?}", p);
        }
    }
    print!("{}", grid_astar::render_ascii(&grid, &[path]));
    Ok(())
}
