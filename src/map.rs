use crate::error::{Error, Result};
use crate::render::render_ascii;
use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

/// Unit offsets of the 4-neighbourhood in expansion order: east, west, south, north.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Read-only view of an occupancy map as consumed by the solvers. Implementations must not change
/// while a search is running on them; the [Sync] bound lets independent searches share one map.
pub trait GridMap: Sync {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Whether the cell at `point` blocks movement. Only called for in-bounds points.
    fn is_occupied(&self, point: Point) -> bool;
    fn start(&self) -> Point;
    fn goal(&self) -> Point;

    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }
    fn can_move_to(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.is_occupied(point)
    }
    /// Traversable 4-neighbours of `point`, in [NEUMANN_OFFSETS] order.
    fn neighborhood(&self, point: Point) -> SmallVec<[Point; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&p| self.can_move_to(p))
            .collect()
    }
    /// Row-major index of an in-bounds point.
    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width() + point.x as usize
    }
    fn point_at(&self, ix: usize) -> Point {
        Point::new((ix % self.width()) as i32, (ix / self.width()) as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    Free,
    Obstacle,
    Start,
    Goal,
}

impl CellType {
    pub fn is_occupied(self) -> bool {
        self == CellType::Obstacle
    }
    pub fn symbol(self) -> char {
        match self {
            CellType::Free => '.',
            CellType::Obstacle => '#',
            CellType::Start => 'S',
            CellType::Goal => 'G',
        }
    }
}

/// Dense row-major map of [CellType]s together with the start and goal of the query.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
    start: Point,
    goal: Point,
}

impl OccupancyGrid {
    /// Creates a grid with every cell free. Start and goal both default to the origin.
    pub fn new(width: usize, height: usize) -> OccupancyGrid {
        OccupancyGrid {
            width,
            height,
            cells: vec![CellType::Free; width * height],
            start: Point::new(0, 0),
            goal: Point::new(0, 0),
        }
    }

    /// Parses rows of `.`, `#`, `S` and `G`. Whitespace inside a row is ignored, so the output of
    /// [render_ascii] (minus its header) reads back in.
    pub fn from_ascii(text: &str) -> Result<OccupancyGrid> {
        let rows = text
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<Vec<char>>()
            })
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = OccupancyGrid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::Parse(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for (x, &c) in row.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match c {
                    '.' => grid.set_cell(p, CellType::Free)?,
                    '#' => grid.set_cell(p, CellType::Obstacle)?,
                    'S' => grid.set_start(p)?,
                    'G' => grid.set_goal(p)?,
                    other => {
                        return Err(Error::Parse(format!(
                            "unexpected symbol '{}' at ({}, {})",
                            other, x, y
                        )))
                    }
                }
            }
        }
        Ok(grid)
    }

    fn check_bounds(&self, point: Point) -> Result<usize> {
        if self.in_bounds(point) {
            Ok(self.get_ix_point(&point))
        } else {
            Err(Error::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get_cell(&self, point: Point) -> Result<CellType> {
        let ix = self.check_bounds(point)?;
        Ok(self.cells[ix])
    }

    pub fn set_cell(&mut self, point: Point, cell: CellType) -> Result<()> {
        let ix = self.check_bounds(point)?;
        self.cells[ix] = cell;
        Ok(())
    }

    /// Moves the start and marks its cell. A previous start marker is left in place.
    pub fn set_start(&mut self, point: Point) -> Result<()> {
        self.set_cell(point, CellType::Start)?;
        self.start = point;
        Ok(())
    }

    /// Moves the goal and marks its cell. A previous goal marker is left in place.
    pub fn set_goal(&mut self, point: Point) -> Result<()> {
        self.set_cell(point, CellType::Goal)?;
        self.goal = point;
        Ok(())
    }

    /// Number of cells that are not obstacles.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_occupied()).count()
    }
}

impl GridMap for OccupancyGrid {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn is_occupied(&self, point: Point) -> bool {
        self.cells[self.get_ix_point(&point)].is_occupied()
    }
    fn start(&self) -> Point {
        self.start
    }
    fn goal(&self) -> Point {
        self.goal
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_ascii(self, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_skips_walls_and_borders() {
        // S#.
        // ...
        let grid = OccupancyGrid::from_ascii("S#.\n...").unwrap();
        let n = grid.neighborhood(Point::new(0, 0));
        assert_eq!(n.as_slice(), &[Point::new(0, 1)]);
        let n = grid.neighborhood(Point::new(1, 1));
        assert_eq!(n.as_slice(), &[Point::new(2, 1), Point::new(0, 1)]);
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mut grid = OccupancyGrid::new(2, 2);
        assert!(matches!(
            grid.set_start(Point::new(2, 0)),
            Err(Error::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(grid.get_cell(Point::new(-1, 0)).is_err());
        assert_eq!(grid.get_cell(Point::new(1, 1)).unwrap(), CellType::Free);
    }

    #[test]
    fn markers_are_traversable() {
        let grid = OccupancyGrid::from_ascii("S.G").unwrap();
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.goal(), Point::new(2, 0));
        assert!(grid.can_move_to(grid.start()));
        assert!(grid.can_move_to(grid.goal()));
        assert_eq!(grid.free_count(), 3);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(matches!(
            OccupancyGrid::from_ascii("...\n.."),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            OccupancyGrid::from_ascii(".x."),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn index_round_trip() {
        let grid = OccupancyGrid::new(4, 3);
        let p = Point::new(3, 2);
        let ix = grid.get_ix_point(&p);
        assert_eq!(ix, 11);
        assert_eq!(grid.point_at(ix), p);
    }
}
