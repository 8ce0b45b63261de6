//! Validation of control graphs using Stillwater's `Validation`.
//!
//! Authoring mistakes are accumulated instead of reported one at a time: a
//! builder or a behaviour tree is checked in one pass and every
//! [`Violation`] found is returned together.
//!
//! # Example
//!
//! ```rust
//! use tickflow::validation::{accumulate, require, Violation};
//!
//! let checks = vec![
//!     require(true, || Violation::DuplicateState { name: "A".into() }),
//!     require(false, || Violation::DuplicateState { name: "B".into() }),
//!     require(false, || Violation::UnknownInitialState { name: "C".into() }),
//! ];
//!
//! let violations = accumulate(checks).unwrap_err();
//! assert_eq!(violations.len(), 2);
//! ```

mod violations;

pub use violations::Violation;

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single structural check.
pub type Check = Validation<(), NonEmptyVec<Violation>>;

/// Turn a condition into a check, building the violation only when it fails.
pub fn require<F>(condition: bool, violation: F) -> Check
where
    F: FnOnce() -> Violation,
{
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Combine checks, keeping every violation in the order the checks were made.
pub fn accumulate(checks: Vec<Check>) -> Result<(), Vec<Violation>> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
