//! Interface to the pathfinding collaborator.
//!
//! Path computation itself belongs to grid or mesh backends outside this
//! crate. This module defines what a behaviour tree needs from them:
//!
//! - [`PathFinder`]: `find_path(start, goal)`, `None` when no path exists
//! - [`WaypointSequence`]: the resulting waypoints, consumed one at a time
//! - [`WaypointFollower`]: a ready-made decision function that walks them

mod follower;
mod path;
mod point;

pub use follower::WaypointFollower;
pub use path::{segments, PathFinder, WaypointSequence};
pub use point::Point3;
