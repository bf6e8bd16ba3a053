use crate::map::{CellType, GridMap};
use grid_util::point::Point;
use image::{Rgb, RgbImage};

const PATH_SYMBOL: char = '*';

const FREE_COLOR: Rgb<u8> = Rgb([240, 240, 240]);
const OBSTACLE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const START_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const GOAL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const GRID_LINE_COLOR: Rgb<u8> = Rgb([200, 200, 200]);
/// Path colours, cycled when there are more paths than entries.
const PATH_COLORS: [Rgb<u8>; 4] = [
    Rgb([0, 0, 255]),
    Rgb([255, 0, 255]),
    Rgb([255, 128, 0]),
    Rgb([0, 160, 160]),
];

/// The start and goal markers take precedence over whatever the cell underneath holds.
fn cell_at<M: GridMap + ?Sized>(map: &M, p: Point) -> CellType {
    if p == map.start() {
        CellType::Start
    } else if p == map.goal() {
        CellType::Goal
    } else if map.is_occupied(p) {
        CellType::Obstacle
    } else {
        CellType::Free
    }
}

/// Draws `map` as text below a `GridMap (WxH)` header, one line per row with a space after every
/// cell and a blank line after the last row. Free cells on any of `paths` show as `*`.
pub fn render_ascii<M: GridMap + ?Sized>(map: &M, paths: &[Vec<Point>]) -> String {
    let w = map.width();
    let h = map.height();
    let mut on_path = vec![false; w * h];
    for p in paths.iter().flatten().filter(|p| map.in_bounds(**p)) {
        on_path[map.get_ix_point(p)] = true;
    }
    let mut out = format!("GridMap ({}x{})\n", w, h);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let p = Point::new(x, y);
            let symbol = match cell_at(map, p) {
                CellType::Free if on_path[map.get_ix_point(&p)] => PATH_SYMBOL,
                cell => cell.symbol(),
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Draws `map` as an image with `cell_size` pixels per cell side. Each cell is filled with the
/// colour of its type and outlined in gray, then every path is drawn as a 2 pixel wide line through
/// the centres of its cells, each path in its own colour.
pub fn render_image<M: GridMap + ?Sized>(
    map: &M,
    paths: &[Vec<Point>],
    cell_size: u32,
) -> RgbImage {
    let cell_size = cell_size.max(1);
    let mut img = RgbImage::from_pixel(
        map.width() as u32 * cell_size,
        map.height() as u32 * cell_size,
        Rgb([255, 255, 255]),
    );
    for ix in 0..map.width() * map.height() {
        let p = map.point_at(ix);
        let color = match cell_at(map, p) {
            CellType::Free => FREE_COLOR,
            CellType::Obstacle => OBSTACLE_COLOR,
            CellType::Start => START_COLOR,
            CellType::Goal => GOAL_COLOR,
        };
        let x0 = p.x as u32 * cell_size;
        let y0 = p.y as u32 * cell_size;
        for dy in 0..cell_size {
            for dx in 0..cell_size {
                let border = dx == 0 || dy == 0 || dx == cell_size - 1 || dy == cell_size - 1;
                let color = if border { GRID_LINE_COLOR } else { color };
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }
    for (path, &color) in paths.iter().zip(PATH_COLORS.iter().cycle()) {
        for (a, b) in path.iter().zip(path.iter().skip(1)) {
            if map.in_bounds(*a) && map.in_bounds(*b) {
                draw_segment(&mut img, centre(a, cell_size), centre(b, cell_size), color);
            }
        }
    }
    img
}

fn centre(p: &Point, cell_size: u32) -> (i64, i64) {
    let half = (cell_size / 2) as i64;
    (
        p.x as i64 * cell_size as i64 + half,
        p.y as i64 * cell_size as i64 + half,
    )
}

/// Steps from `from` to `to` one pixel at a time, stamping a 2x2 block ending at each position.
fn draw_segment(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).max(1);
    for t in 0..=steps {
        let x = from.0 + dx * t / steps;
        let y = from.1 + dy * t / steps;
        for (sx, sy) in [(x - 1, y - 1), (x, y - 1), (x - 1, y), (x, y)] {
            if sx >= 0 && sy >= 0 && (sx as u32) < img.width() && (sy as u32) < img.height() {
                img.put_pixel(sx as u32, sy as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::OccupancyGrid;
    use crate::solver::GridSolver;
    use crate::AstarSolver;
    use itertools::Itertools;

    #[test]
    fn renders_cells_and_path() {
        let grid = OccupancyGrid::from_ascii("S..\n.#.\n..G").unwrap();
        let path = AstarSolver::new().find_path(&grid).unwrap();
        let text = render_ascii(&grid, &[path]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "GridMap (3x3)");
        assert_eq!(lines[2], ". # * ");
        assert!(lines[1].starts_with("S "));
        assert!(lines[3].ends_with(" G "));
        assert_eq!(text.matches('*').count(), 3);
    }

    #[test]
    fn display_has_no_path_markers() {
        let grid = OccupancyGrid::from_ascii("S#G").unwrap();
        assert_eq!(grid.to_string(), "GridMap (3x1)\nS # G \n\n");
    }

    #[test]
    fn rendered_body_parses_back() {
        let grid = OccupancyGrid::from_ascii(".#.\nS.G\n.#.").unwrap();
        let text = render_ascii(&grid, &[]);
        let body = text.lines().skip(1).join("\n");
        let parsed = OccupancyGrid::from_ascii(&body).unwrap();
        assert_eq!(parsed.start(), grid.start());
        assert_eq!(parsed.goal(), grid.goal());
        assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn image_draws_markers_and_path() {
        let grid = OccupancyGrid::from_ascii("SG").unwrap();
        let path = vec![Point::new(0, 0), Point::new(1, 0)];
        let img = render_image(&grid, &[path], 10);
        assert_eq!(img.dimensions(), (20, 10));
        assert_eq!(*img.get_pixel(0, 0), GRID_LINE_COLOR);
        assert_eq!(*img.get_pixel(19, 9), GRID_LINE_COLOR);
        assert_eq!(*img.get_pixel(2, 8), START_COLOR);
        assert_eq!(*img.get_pixel(17, 8), GOAL_COLOR);
        // The line runs between the cell centres at (5, 5) and (15, 5).
        for x in 4..=15 {
            assert_eq!(*img.get_pixel(x, 5), PATH_COLORS[0]);
            assert_eq!(*img.get_pixel(x, 4), PATH_COLORS[0]);
        }
        assert_eq!(*img.get_pixel(17, 5), GOAL_COLOR);
        assert_eq!(*img.get_pixel(5, 7), START_COLOR);
    }

    #[test]
    fn image_fills_free_and_obstacle_cells() {
        let grid = OccupancyGrid::from_ascii("S.#G").unwrap();
        let img = render_image(&grid, &[], 4);
        assert_eq!(img.dimensions(), (16, 4));
        assert_eq!(*img.get_pixel(5, 1), FREE_COLOR);
        assert_eq!(*img.get_pixel(9, 2), OBSTACLE_COLOR);
        assert_eq!(*img.get_pixel(8, 0), GRID_LINE_COLOR);
    }
}
