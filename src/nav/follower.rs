use crate::behaviour::{Action, BehaviourState};
use crate::nav::{Point3, WaypointSequence};

/// Walks a position along a [`WaypointSequence`] at a fixed speed.
///
/// [`decide`](Self::decide) has the shape of an [`Action`] decision function:
/// it starts on `Initialise`, stays `Ongoing` while walking, succeeds at the
/// last waypoint, and fails straight away if the path is empty.
///
/// Every `Initialise` restarts the walk from the original start position
/// along the full path, so a tree holding the follower can be reset and run
/// again.
#[derive(Debug, Clone)]
pub struct WaypointFollower {
    route: WaypointSequence,
    start: Point3,
    path: WaypointSequence,
    target: Option<Point3>,
    position: Point3,
    speed: f32,
    arrival_radius: f32,
}

impl WaypointFollower {
    pub fn new(start: Point3, path: WaypointSequence, speed: f32) -> Self {
        Self {
            route: path.clone(),
            start,
            path,
            target: None,
            position: start,
            speed,
            arrival_radius: 0.01,
        }
    }

    /// Distance at which a waypoint counts as reached.
    pub fn with_arrival_radius(mut self, radius: f32) -> Self {
        self.arrival_radius = radius.max(0.0);
        self
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Waypoints not yet reached, including the current target.
    pub fn remaining(&self) -> usize {
        self.path.len() + usize::from(self.target.is_some())
    }

    pub fn decide(&mut self, dt: f32, state: BehaviourState) -> BehaviourState {
        match state {
            BehaviourState::Initialise => {
                self.path = self.route.clone();
                self.position = self.start;
                self.target = self.path.pop_next();
                if self.target.is_none() {
                    tracing::debug!("waypoint follower started with an empty path");
                    return BehaviourState::Failure;
                }
                BehaviourState::Ongoing
            }
            BehaviourState::Ongoing => self.walk(dt),
            done => done,
        }
    }

    /// Wrap the follower in an action leaf.
    pub fn into_action(self, name: impl Into<String>) -> Action {
        self.into_action_with(name, |_| {})
    }

    /// Wrap the follower in an action leaf, reporting the position after
    /// every tick to `on_move`.
    pub fn into_action_with<F>(mut self, name: impl Into<String>, mut on_move: F) -> Action
    where
        F: FnMut(Point3) + 'static,
    {
        Action::new(name, move |dt, state| {
            let next = self.decide(dt, state);
            on_move(self.position);
            next
        })
    }

    fn walk(&mut self, dt: f32) -> BehaviourState {
        let mut budget = self.speed.max(0.0) * dt.max(0.0);

        while let Some(target) = self.target {
            let dist = self.position.distance(target);
            if dist <= self.arrival_radius {
                self.target = self.path.pop_next();
                continue;
            }
            if budget >= dist {
                self.position = target;
                budget -= dist;
                self.target = self.path.pop_next();
                continue;
            }
            self.position = self.position.move_towards(target, budget);
            return BehaviourState::Ongoing;
        }

        BehaviourState::Success
    }
}
