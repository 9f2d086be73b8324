use crate::{Cost, NodeID, Point};

/// A Node on a reconstructed Route, together with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// the Node in the Graph
    pub id: NodeID,
    /// the position of the Node in the Graph's coordinates
    pub pos: Point,
}

use std::fmt;
impl fmt::Display for Waypoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.id)
    }
}

/// A generic implementation of a Path
///
/// Stores a sequence of Nodes in `path` and the total real-world length of traversing these
/// Nodes in `distance`.
/// Note that the individual lengths of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the Path
    pub path: Vec<P>,
    /// the total length of the Path
    pub distance: Cost,
}

/// The result of a successful search: the Waypoints from start to goal.
///
/// `Route::default()` is the empty result with a distance of `0`.
pub type Route = Path<Waypoint>;

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total distance
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use route_planner::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
    ///
    /// assert_eq!(path.path, vec!['a', 'b', 'c']);
    /// assert_eq!(path.distance, 4.5);
    /// ```
    pub fn new(path: Vec<P>, distance: Cost) -> Path<P> {
        Path { path, distance }
    }
}

impl Path<Waypoint> {
    /// The ids of all Nodes on the Route, in order
    pub fn ids(&self) -> Vec<NodeID> {
        self.path.iter().map(|waypoint| waypoint.id).collect()
    }

    /// The positions of all Nodes on the Route, in order
    pub fn points(&self) -> Vec<Point> {
        self.path.iter().map(|waypoint| waypoint.pos).collect()
    }
}

impl<P> Default for Path<P> {
    fn default() -> Path<P> {
        Path::new(Vec::new(), 0.0)
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Distance = {}]: ", self.distance)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
