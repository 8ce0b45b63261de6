//! End-to-end scenarios driving whole machines and trees tick by tick.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tickflow::behaviour::{
    action, always_failure, always_success, selector, sequence, BehaviourNode, BehaviourState,
    NodeKind,
};
use tickflow::builder::{guarded_transition, simple_transition, BuildError, StateMachineBuilder};
use tickflow::core::State;
use tickflow::nav::{PathFinder, Point3, WaypointFollower, WaypointSequence};
use tickflow::pushdown::{PushdownMachine, PushdownResult, PushdownState};
use tickflow::validation::Violation;

type Log = Rc<RefCell<Vec<String>>>;

fn counted(name: &'static str, result: BehaviourState, calls: &Rc<Cell<usize>>) -> Box<dyn BehaviourNode> {
    let calls = Rc::clone(calls);
    action(name, move |_, _| {
        calls.set(calls.get() + 1);
        result
    })
}

#[test]
fn sequence_of_successes_resolves_in_one_tick() {
    let mut root = sequence(
        "Root",
        vec![always_success("First"), always_success("Second")],
    );

    assert_eq!(root.execute(0.016), BehaviourState::Success);
}

#[test]
fn selector_of_failures_drives_every_child() {
    let calls = Rc::new(Cell::new(0));
    let mut root = selector(
        "Root",
        vec![
            counted("First", BehaviourState::Failure, &calls),
            counted("Second", BehaviourState::Failure, &calls),
        ],
    );

    assert_eq!(root.execute(0.016), BehaviourState::Failure);
    assert_eq!(calls.get(), 2);
}

#[test]
fn sequence_short_circuits_on_failure() {
    let third = Rc::new(Cell::new(0));
    let mut root = sequence(
        "Root",
        vec![
            always_success("First"),
            always_failure("Second"),
            counted("Third", BehaviourState::Success, &third),
        ],
    );

    assert_eq!(root.execute(1.0), BehaviourState::Failure);
    assert_eq!(third.get(), 0);
}

#[test]
fn selector_short_circuits_on_success() {
    let rest = Rc::new(Cell::new(0));
    let mut root = selector(
        "Root",
        vec![
            always_success("First"),
            counted("Second", BehaviourState::Success, &rest),
            counted("Third", BehaviourState::Failure, &rest),
        ],
    );

    assert_eq!(root.execute(1.0), BehaviourState::Success);
    assert_eq!(rest.get(), 0);
}

/// Leaf that stays ongoing until `timer` seconds have passed, then reports
/// whatever `outcome` holds.
fn timed(name: &'static str, timer: f32, outcome: Rc<Cell<bool>>) -> Box<dyn BehaviourNode> {
    let mut remaining = timer;
    action(name, move |dt, state| match state {
        BehaviourState::Initialise => {
            remaining = timer;
            BehaviourState::Ongoing
        }
        BehaviourState::Ongoing => {
            remaining -= dt;
            if remaining > 0.0 {
                BehaviourState::Ongoing
            } else if outcome.get() {
                BehaviourState::Success
            } else {
                BehaviourState::Failure
            }
        }
        done => done,
    })
}

fn adventure(found_treasure: &Rc<Cell<bool>>) -> Box<dyn BehaviourNode> {
    let yes = Rc::new(Cell::new(true));
    sequence(
        "Root Sequence",
        vec![
            sequence(
                "Room Sequence",
                vec![
                    timed("Find Key", 2.0, Rc::clone(&yes)),
                    timed("Go To Room", 1.0, Rc::clone(&yes)),
                    timed("Open Door", 0.0, Rc::clone(&yes)),
                ],
            ),
            selector(
                "Loot Selection",
                vec![
                    timed("Look For Treasure", 1.0, Rc::clone(found_treasure)),
                    timed("Look For Items", 1.0, yes),
                ],
            ),
        ],
    )
}

fn run_to_completion(root: &mut Box<dyn BehaviourNode>) -> (BehaviourState, usize) {
    let mut ticks = 0;
    loop {
        ticks += 1;
        let state = root.execute(1.0);
        if state.is_terminal() {
            return (state, ticks);
        }
        assert!(ticks < 100, "tree never finished");
    }
}

#[test]
fn adventure_tree_suspends_and_resumes() {
    let treasure = Rc::new(Cell::new(false));
    let mut root = adventure(&treasure);

    assert_eq!(root.execute(1.0), BehaviourState::Ongoing);
    let snapshot = root.snapshot();
    let room = snapshot.find("Room Sequence").unwrap();
    assert_eq!(room.cursor, Some(0));
    assert_eq!(
        snapshot.find("Find Key").unwrap().state,
        BehaviourState::Ongoing
    );

    let (result, _) = run_to_completion(&mut root);
    assert_eq!(result, BehaviourState::Success);

    let snapshot = root.snapshot();
    assert_eq!(
        snapshot.find("Look For Treasure").unwrap().state,
        BehaviourState::Failure
    );
    assert_eq!(
        snapshot.find("Look For Items").unwrap().state,
        BehaviourState::Success
    );
}

#[test]
fn adventure_tree_repeats_after_reset() {
    let treasure = Rc::new(Cell::new(true));
    let mut root = adventure(&treasure);

    let (first, first_ticks) = run_to_completion(&mut root);
    for _ in 0..4 {
        root.reset();
        assert!(root
            .snapshot()
            .children
            .iter()
            .all(|c| c.state == BehaviourState::Initialise));

        let (again, ticks) = run_to_completion(&mut root);
        assert_eq!(again, first);
        assert_eq!(ticks, first_ticks);
    }

    let snapshot = root.snapshot();
    assert_eq!(
        snapshot.find("Look For Items").unwrap().state,
        BehaviourState::Initialise
    );
}

#[test]
fn tree_validation_reports_empty_composites() {
    let tree = sequence(
        "Root",
        vec![selector("Nothing", vec![]), sequence("Also Nothing", vec![])],
    );

    let violations = tree.validate().unwrap_err();

    assert_eq!(
        violations,
        vec![
            Violation::EmptyComposite {
                name: "Nothing".into(),
                kind: NodeKind::Selector,
            },
            Violation::EmptyComposite {
                name: "Also Nothing".into(),
                kind: NodeKind::Sequence,
            },
        ]
    );
}

#[test]
fn builder_machine_counts_between_states() {
    let data = Rc::new(Cell::new(0));
    let up = Rc::clone(&data);
    let down = Rc::clone(&data);
    let high = Rc::clone(&data);
    let low = Rc::clone(&data);
    let mut machine = StateMachineBuilder::new()
        .state(State::new("A", move |_| up.set(up.get() + 1)))
        .state(State::new("B", move |_| down.set(down.get() - 1)))
        .transition(guarded_transition("A", "B", move || high.get() > 10))
        .transition(guarded_transition("B", "A", move || low.get() < 0))
        .build()
        .unwrap();

    let mut visited = Vec::new();
    for _ in 0..100 {
        machine.update(1.0).unwrap();
        visited.push(machine.active_state_name().unwrap().to_string());
    }

    assert_eq!(visited[9], "A");
    assert_eq!(visited[10], "B");
    assert!(visited.iter().any(|name| name == "A"));
    assert!((-1..=11).contains(&data.get()));
}

#[test]
fn builder_rejects_unknown_target() {
    let result = StateMachineBuilder::new()
        .state(State::idle("Idle"))
        .transition(simple_transition("Idle", "Chase"))
        .build();

    match result {
        Err(BuildError::Invalid(violations)) => assert_eq!(
            violations,
            vec![Violation::DanglingReference {
                transition: "Idle -> Chase".into(),
                state: "Chase".into(),
            }]
        ),
        other => panic!("expected invalid declaration, got {other:?}"),
    }
}

/// Screen that records its hooks and follows a shared script of results.
struct Screen {
    name: &'static str,
    log: Log,
    script: Rc<RefCell<Vec<Option<&'static str>>>>,
}

impl Screen {
    fn new(name: &'static str, log: &Log, script: &Rc<RefCell<Vec<Option<&'static str>>>>) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            script: Rc::clone(script),
        }
    }
}

impl PushdownState for Screen {
    fn on_update(&mut self, _dt: f32) -> PushdownResult {
        self.log.borrow_mut().push(format!("{}.update", self.name));
        let next = self.script.borrow_mut().remove(0);
        match next {
            Some(name) => PushdownResult::push(Screen::new(name, &self.log, &self.script)),
            None => PushdownResult::Pop,
        }
    }

    fn on_awake(&mut self) {
        self.log.borrow_mut().push(format!("{}.awake", self.name));
    }

    fn on_sleep(&mut self) {
        self.log.borrow_mut().push(format!("{}.sleep", self.name));
    }

    fn name(&self) -> &str {
        self.name
    }
}

#[test]
fn popping_covering_state_awakens_the_one_beneath_again() {
    let log: Log = Rc::default();
    let script = Rc::new(RefCell::new(vec![Some("Game"), None, None]));
    let mut machine = PushdownMachine::new(Box::new(Screen::new("Intro", &log, &script)));

    assert!(machine.update(1.0));
    assert_eq!(machine.active_name(), Some("Game"));
    assert!(machine.update(1.0));
    assert_eq!(machine.active_name(), Some("Intro"));

    let awakenings = log
        .borrow()
        .iter()
        .filter(|entry| *entry == "Intro.awake")
        .count();
    assert_eq!(awakenings, 2);
}

#[test]
fn popping_last_state_stops_the_machine() {
    let log: Log = Rc::default();
    let script = Rc::new(RefCell::new(vec![None]));
    let mut machine = PushdownMachine::new(Box::new(Screen::new("Intro", &log, &script)));

    assert!(!machine.update(1.0));
    let calls = log.borrow().len();
    assert!(!machine.update(1.0));
    assert!(!machine.update(1.0));

    assert!(machine.is_empty());
    assert_eq!(log.borrow().len(), calls);
    assert_eq!(
        *log.borrow(),
        vec!["Intro.awake", "Intro.update", "Intro.sleep"]
    );
}

/// Straight-line finder over a 10-unit lattice.
struct Lattice;

impl PathFinder for Lattice {
    fn find_path(&self, start: Point3, goal: Point3) -> Option<WaypointSequence> {
        if goal.x != start.x {
            return None;
        }
        let steps = ((goal.z - start.z) / 10.0).round() as i32;
        Some(
            (0..=steps)
                .map(|i| Point3::new(start.x, start.y, start.z + 10.0 * i as f32))
                .collect(),
        )
    }
}

#[test]
fn follower_walks_found_path_inside_tree() {
    let start = Point3::new(80.0, 0.0, 10.0);
    let goal = Point3::new(80.0, 0.0, 80.0);
    let path = Lattice.find_path(start, goal).unwrap();
    assert_eq!(path.len(), 8);

    let last_seen = Rc::new(Cell::new(start));
    let sink = Rc::clone(&last_seen);
    let walk: Box<dyn BehaviourNode> = Box::new(
        WaypointFollower::new(start, path, 20.0).into_action_with("Walk", move |p| sink.set(p)),
    );
    let mut root = sequence("Travel", vec![walk]);

    let (result, ticks) = run_to_completion(&mut root);

    assert_eq!(result, BehaviourState::Success);
    assert_eq!(last_seen.get(), goal);
    assert!(ticks >= 4);
}

#[test]
fn unreachable_goal_fails_the_tree() {
    let start = Point3::new(80.0, 0.0, 10.0);
    let path = Lattice
        .find_path(start, Point3::new(0.0, 0.0, 0.0))
        .unwrap_or_default();
    let walk: Box<dyn BehaviourNode> =
        Box::new(WaypointFollower::new(start, path, 20.0).into_action("Walk"));
    let mut root = selector("Travel Or Wait", vec![walk, always_failure("Wait")]);

    assert_eq!(root.execute(1.0), BehaviourState::Failure);
}

#[test]
fn walking_tree_can_be_rerun_after_reset() {
    let walk: Box<dyn BehaviourNode> = Box::new(
        WaypointFollower::new(Point3::ZERO, vec![Point3::new(1.0, 0.0, 0.0)].into(), 10.0)
            .into_action("Walk"),
    );
    let mut root = sequence("Travel", vec![walk]);

    let (first, _) = run_to_completion(&mut root);
    root.reset();
    let (second, _) = run_to_completion(&mut root);

    assert_eq!(first, BehaviourState::Success);
    assert_eq!(second, BehaviourState::Success);
}
