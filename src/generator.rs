use crate::error::{Error, Result};
use crate::map::{CellType, GridMap, OccupancyGrid};
use grid_util::point::Point;
use log::info;
use rand::Rng;

/// Samples a uniformly random traversable cell other than those in `exclude`. Returns [None] if
/// no such cell exists.
pub fn random_free_point<M, R>(map: &M, rng: &mut R, exclude: &[Point]) -> Option<Point>
where
    M: GridMap + ?Sized,
    R: Rng + ?Sized,
{
    let candidates = (0..map.width() * map.height())
        .map(|ix| map.point_at(ix))
        .filter(|p| !map.is_occupied(*p) && !exclude.contains(p))
        .collect::<Vec<Point>>();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

/// Fills a new `width` x `height` grid with obstacles, each cell independently with probability
/// `obstacle_prob`, then places start and goal on distinct free cells.
pub fn generate_random_map<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    obstacle_prob: f64,
    rng: &mut R,
) -> Result<OccupancyGrid> {
    if !(0.0..=1.0).contains(&obstacle_prob) {
        return Err(Error::InvalidProbability(obstacle_prob));
    }
    let mut grid = OccupancyGrid::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.gen_bool(obstacle_prob) {
                grid.set_cell(Point::new(x, y), CellType::Obstacle)?;
            }
        }
    }
    let start = random_free_point(&grid, rng, &[]).ok_or(Error::NoFreeCell)?;
    let goal = random_free_point(&grid, rng, &[start]).ok_or(Error::NoFreeCell)?;
    grid.set_start(start)?;
    grid.set_goal(goal)?;
    info!(
        "Generated {}x{} map with {} free cells, start {} and goal {}",
        width,
        height,
        grid.free_count(),
        start,
        goal
    );
    Ok(grid)
}
