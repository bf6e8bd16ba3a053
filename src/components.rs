use crate::map::GridMap;
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Connected components of the traversable cells of a map under 4-directional movement, kept in a
/// [UnionFind] structure. Answers reachability queries without flood-filling.
#[derive(Clone, Debug)]
pub struct Components {
    width: usize,
    height: usize,
    components: UnionFind<usize>,
}

impl Components {
    /// Links up every traversable cell with its traversable east and south neighbours. Together
    /// these cover every 4-directional edge exactly once.
    pub fn generate<M: GridMap + ?Sized>(map: &M) -> Components {
        let w = map.width();
        let h = map.height();
        let mut components = UnionFind::new(w * h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let point = Point::new(x, y);
                if !map.can_move_to(point) {
                    continue;
                }
                let parent_ix = map.get_ix_point(&point);
                [Point::new(x + 1, y), Point::new(x, y + 1)]
                    .into_iter()
                    .filter(|p| map.can_move_to(*p))
                    .for_each(|p| {
                        components.union(parent_ix, map.get_ix_point(&p));
                    });
            }
        }
        debug!("Generated connected components for {}x{} map", w, h);
        Components {
            width: w,
            height: h,
            components,
        }
    }

    fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to, if it is on the map.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| self.components.find(self.ix(point)))
    }

    /// Checks if start and goal are on the same component. Points outside the map are unreachable.
    /// Occupied cells form singleton components, so an occupied start is only "reachable" from
    /// itself.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            false
        }
    }

    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}
