use super::{check_metric_scale, NeighborCache, RouteGraph};
use crate::{Cost, NodeID, PlannerError, Point};

/// Which cells of a [`GridGraph`] are connected to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// Up, down, left and right.
    ///
    /// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood)
    /// or Manhattan Metric.
    ///
    /// ```no_code
    ///   o
    ///   |
    /// o-A-o
    ///   |
    ///   o
    /// ```
    Four,
    /// The 4 cardinal directions as well as the 4 diagonals.
    ///
    /// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
    ///
    /// ```no_code
    /// o o o
    ///  \|/
    /// o-A-o
    ///  /|\
    /// o o o
    /// ```
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Connectivity::Four => &[(0, -1), (1, 0), (0, 1), (-1, 0)],
            Connectivity::Eight => &[
                (0, -1),
                (1, -1),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
            ],
        }
    }
}

/// A rectangular lattice of cells with unit spacing.
///
/// The cell at `(x, y)` has the id `x + y * width` and sits at the position `(x, y)`, so
/// orthogonal steps have a length of `1` and diagonal steps a length of `sqrt(2)`. Blocked cells
/// are still Nodes of the Graph, but they have no neighbors and are no one's neighbor.
///
/// Normalized points are mapped onto the extent of the lattice, `(0, 0)` being the first and
/// `(1, 1)` the last cell.
///
/// ## Examples
/// ```
/// # use route_planner::prelude::*;
/// let mut grid = GridGraph::new(3, 2, Connectivity::Four);
/// grid.set_blocked(1, 0, true);
///
/// assert_eq!(grid.neighbors(grid.id_at(0, 0)), &[grid.id_at(0, 1)]);
/// assert_eq!(grid.find_closest_node((1.0, 1.0)), Ok(grid.id_at(2, 1)));
/// ```
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: usize,
    height: usize,
    connectivity: Connectivity,
    blocked: Vec<bool>,
    metric_scale: Cost,
    neighbors: NeighborCache,
}

impl GridGraph {
    /// Creates a Grid without any blocked cells and a metric scale of `1`
    pub fn new(width: usize, height: usize, connectivity: Connectivity) -> GridGraph {
        GridGraph {
            width,
            height,
            connectivity,
            blocked: vec![false; width * height],
            metric_scale: 1.0,
            neighbors: NeighborCache::new(width * height),
        }
    }

    /// Creates a Grid from a function that decides which cells are blocked
    pub fn from_fn(
        (width, height): (usize, usize),
        connectivity: Connectivity,
        mut is_blocked: impl FnMut(usize, usize) -> bool,
    ) -> GridGraph {
        let mut grid = GridGraph::new(width, height, connectivity);
        for y in 0..height {
            for x in 0..width {
                grid.blocked[x + y * width] = is_blocked(x, y);
            }
        }
        grid
    }

    /// Sets the metric scale.
    ///
    /// Fails with [`PlannerError::InvalidInput`] if the scale is not a positive number.
    pub fn with_metric_scale(mut self, metric_scale: Cost) -> Result<GridGraph, PlannerError> {
        self.metric_scale = check_metric_scale(metric_scale)?;
        Ok(self)
    }

    /// Blocks or unblocks a cell.
    ///
    /// Takes `&mut self`, which means no search can be running, and clears all cached neighbors.
    #[track_caller]
    pub fn set_blocked(&mut self, x: usize, y: usize, blocked: bool) {
        let id = self.id_at(x, y);
        self.blocked[id] = blocked;
        self.neighbors = NeighborCache::new(self.width * self.height);
    }

    /// Returns whether the cell with the given id is blocked
    pub fn is_blocked(&self, id: NodeID) -> bool {
        self.blocked[id]
    }

    /// The id of the cell at `(x, y)`
    #[track_caller]
    pub fn id_at(&self, x: usize, y: usize) -> NodeID {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside of the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }

    /// The `(x, y)` coordinates of a cell
    pub fn cell_of(&self, id: NodeID) -> (usize, usize) {
        (id % self.width, id / self.width)
    }

    /// The size of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn compute_neighbors(&self, id: NodeID) -> Vec<NodeID> {
        if self.blocked[id] {
            return vec![];
        }
        let (width, height) = (self.width as isize, self.height as isize);
        let (x, y) = self.cell_of(id);
        self.connectivity
            .offsets()
            .iter()
            .map(|(dx, dy)| (x as isize + dx, y as isize + dy))
            .filter(|&(x, y)| x >= 0 && y >= 0 && x < width && y < height)
            .map(|(x, y)| x as usize + y as usize * self.width)
            .filter(|&other| !self.blocked[other])
            .collect()
    }
}

impl RouteGraph for GridGraph {
    fn node_count(&self) -> usize {
        self.width * self.height
    }

    fn position(&self, id: NodeID) -> Point {
        let (x, y) = self.cell_of(id);
        (x as f64, y as f64)
    }

    fn find_closest_node(&self, (x, y): Point) -> Result<NodeID, PlannerError> {
        if self.node_count() == 0 {
            return Err(PlannerError::invalid_input("the grid has no cells"));
        }
        let to_cell = |v: f64, len: usize| {
            let max = (len - 1) as f64;
            (v * max).round().clamp(0.0, max) as usize
        };
        Ok(self.id_at(to_cell(x, self.width), to_cell(y, self.height)))
    }

    fn neighbors(&self, id: NodeID) -> &[NodeID] {
        self.neighbors
            .get_or_compute(id, || self.compute_neighbors(id))
    }

    fn metric_scale(&self) -> Cost {
        self.metric_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_neighbors() {
        let grid = GridGraph::new(5, 5, Connectivity::Four);
        let neighbors = grid
            .neighbors(grid.id_at(0, 2))
            .iter()
            .map(|&id| grid.cell_of(id))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn eight_neighbors() {
        let grid = GridGraph::new(5, 5, Connectivity::Eight);
        let neighbors = grid
            .neighbors(grid.id_at(0, 2))
            .iter()
            .map(|&id| grid.cell_of(id))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)]);
    }

    #[test]
    fn blocked_cells() {
        let grid = GridGraph::from_fn((3, 3), Connectivity::Four, |x, y| (x, y) == (1, 1));
        assert!(grid.is_blocked(grid.id_at(1, 1)));
        assert!(grid.neighbors(grid.id_at(1, 1)).is_empty());
        let neighbors = grid
            .neighbors(grid.id_at(1, 0))
            .iter()
            .map(|&id| grid.cell_of(id))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(2, 0), (0, 0)]);
    }

    #[test]
    fn set_blocked_clears_cache() {
        let mut grid = GridGraph::new(2, 1, Connectivity::Four);
        assert_eq!(grid.neighbors(0), &[1]);
        grid.set_blocked(1, 0, true);
        assert!(grid.neighbors(0).is_empty());
    }

    #[test]
    fn closest_node() {
        let grid = GridGraph::new(5, 3, Connectivity::Four);
        assert_eq!(grid.find_closest_node((0.0, 0.0)), Ok(0));
        assert_eq!(grid.find_closest_node((1.0, 1.0)), Ok(grid.id_at(4, 2)));
        assert_eq!(grid.find_closest_node((0.5, 0.5)), Ok(grid.id_at(2, 1)));
        assert_eq!(grid.find_closest_node((0.3, 0.9)), Ok(grid.id_at(1, 2)));
    }

    #[test]
    fn empty_grid() {
        let grid = GridGraph::new(0, 4, Connectivity::Four);
        assert!(matches!(
            grid.find_closest_node((0.0, 0.0)),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn unit_steps() {
        let grid = GridGraph::new(3, 3, Connectivity::Eight)
            .with_metric_scale(10.0)
            .unwrap();
        assert_eq!(grid.distance(0, 1), 1.0);
        assert_eq!(grid.distance(0, grid.id_at(1, 1)), 2f64.sqrt());
        assert_eq!(grid.metric_scale(), 10.0);
        assert!(GridGraph::new(1, 1, Connectivity::Four)
            .with_metric_scale(-1.0)
            .is_err());
    }
}
