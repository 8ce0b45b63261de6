//! Grid Pathfinding
//!
//! A breadth-first grid backend implements [`PathFinder`]. The demo asks it
//! for a route, prints the route as line segments, then hands it to a
//! [`WaypointFollower`] leaf inside a behaviour tree that walks it.
//!
//! Run with: cargo run --example pathfinding

use std::collections::{HashMap, HashSet, VecDeque};
use tickflow::behaviour::{action, sequence, BehaviourNode, BehaviourState};
use tickflow::nav::{segments, PathFinder, Point3, WaypointFollower, WaypointSequence};
use tracing_subscriber::EnvFilter;

/// `x` is a wall, anything else is walkable. Rows run along +z, columns along +x.
const TEST_GRID: &str = "\
xxxxxxxxxx
x........x
x.xxxxxx.x
x.x....x.x
x.x.xx.xxx
x...x....x
xxxxx.xx.x
x........x
x.xxxxxx.x
xxxxxxxxxx";

type Cell = (usize, usize);

struct NavigationGrid {
    node_size: f32,
    width: usize,
    height: usize,
    walkable: Vec<bool>,
}

impl NavigationGrid {
    fn parse(node_size: f32, map: &str) -> Self {
        let rows: Vec<&str> = map.lines().collect();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let walkable = rows
            .iter()
            .flat_map(|row| (0..width).map(move |x| row.as_bytes().get(x).is_some_and(|&b| b != b'x')))
            .collect();
        Self {
            node_size,
            width,
            height: rows.len(),
            walkable,
        }
    }

    fn cell_of(&self, point: Point3) -> Option<Cell> {
        if point.x < 0.0 || point.z < 0.0 {
            return None;
        }
        let cell = (
            (point.x / self.node_size).round() as usize,
            (point.z / self.node_size).round() as usize,
        );
        self.is_walkable(cell).then_some(cell)
    }

    fn to_world(&self, (x, z): Cell) -> Point3 {
        Point3::new(x as f32 * self.node_size, 0.0, z as f32 * self.node_size)
    }

    fn is_walkable(&self, (x, z): Cell) -> bool {
        x < self.width && z < self.height && self.walkable[z * self.width + x]
    }

    fn neighbours(&self, (x, z): Cell) -> impl Iterator<Item = Cell> + '_ {
        [
            (x.wrapping_sub(1), z),
            (x + 1, z),
            (x, z.wrapping_sub(1)),
            (x, z + 1),
        ]
        .into_iter()
        .filter(move |&cell| self.is_walkable(cell))
    }
}

impl PathFinder for NavigationGrid {
    fn find_path(&self, start: Point3, goal: Point3) -> Option<WaypointSequence> {
        let from = self.cell_of(start)?;
        let to = self.cell_of(goal)?;

        let mut parents: HashMap<Cell, Cell> = HashMap::new();
        let mut seen = HashSet::from([from]);
        let mut frontier = VecDeque::from([from]);

        while let Some(cell) = frontier.pop_front() {
            if cell == to {
                let mut cells = vec![cell];
                let mut current = cell;
                while let Some(&previous) = parents.get(&current) {
                    cells.push(previous);
                    current = previous;
                }
                cells.reverse();
                return Some(cells.into_iter().map(|c| self.to_world(c)).collect());
            }
            for next in self.neighbours(cell) {
                if seen.insert(next) {
                    parents.insert(next, cell);
                    frontier.push_back(next);
                }
            }
        }

        None
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Grid Pathfinding ===\n");

    let grid = NavigationGrid::parse(10.0, TEST_GRID);
    let start = Point3::new(80.0, 0.0, 10.0);
    let goal = Point3::new(80.0, 0.0, 80.0);

    let Some(path) = grid.find_path(start, goal) else {
        println!("No path from {start:?} to {goal:?}");
        return;
    };

    let nodes: Vec<Point3> = path.clone().collect();
    println!("Found a path with {} waypoints:", nodes.len());
    for (a, b) in segments(&nodes) {
        println!("  ({:>4}, {:>4}) -> ({:>4}, {:>4})", a.x, a.z, b.x, b.z);
    }

    let walk: Box<dyn BehaviourNode> = Box::new(
        WaypointFollower::new(start, path, 15.0).into_action_with("Walk To Goal", |p| {
            println!("  walking... at ({:.1}, {:.1})", p.x, p.z);
        }),
    );
    let mut root = sequence(
        "Travel",
        vec![
            walk,
            action("Arrive", |_, _| {
                println!("  arrived!");
                BehaviourState::Success
            }),
        ],
    );

    println!("\nWalking the path at 15 units per second:");
    let mut state = BehaviourState::Initialise;
    while !state.is_terminal() {
        state = root.execute(1.0);
    }
    println!("\nTravel finished: {state}");

    let blocked = Point3::new(40.0, 0.0, 40.0);
    println!(
        "Path to a wall at {blocked:?}: {}",
        if grid.find_path(start, blocked).is_some() { "found" } else { "none" }
    );
}
