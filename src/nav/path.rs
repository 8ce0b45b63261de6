use crate::nav::Point3;
use std::collections::VecDeque;

/// Ordered waypoints from start to goal, consumed front to back.
///
/// Each waypoint is handed out exactly once by [`pop_next`](Self::pop_next);
/// iterating the sequence drains it the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointSequence {
    points: VecDeque<Point3>,
}

impl WaypointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a waypoint after the existing ones.
    pub fn push(&mut self, point: Point3) {
        self.points.push_back(point);
    }

    /// Remove and return the next waypoint, `None` once exhausted.
    pub fn pop_next(&mut self) -> Option<Point3> {
        self.points.pop_front()
    }

    pub fn peek_next(&self) -> Option<Point3> {
        self.points.front().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Iterator for WaypointSequence {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        self.pop_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.points.len(), Some(self.points.len()))
    }
}

impl FromIterator<Point3> for WaypointSequence {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point3>> for WaypointSequence {
    fn from(points: Vec<Point3>) -> Self {
        Self {
            points: points.into(),
        }
    }
}

/// Source of paths between two points.
///
/// Grid and mesh backends live outside this crate; behaviour tree actions
/// only need this query.
pub trait PathFinder {
    /// Compute waypoints from `start` to `goal`, or `None` if no path exists.
    fn find_path(&self, start: Point3, goal: Point3) -> Option<WaypointSequence>;
}

/// Consecutive point pairs, e.g. for drawing a path as line segments.
pub fn segments(points: &[Point3]) -> impl Iterator<Item = (Point3, Point3)> + '_ {
    points.windows(2).map(|pair| (pair[0], pair[1]))
}
