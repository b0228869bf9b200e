//! # Check Chains
//!
//! A [`Chain`] is a named, ordered list of precondition checks over one subject
//! (usually a submitted payload). [`Chain::run`] evaluates the checks in order and
//! stops at the first failure, so a caller sees at most one error per request and the
//! order of the checks decides which one.
//!
//! ```rust
//! use record_actor::validation::Chain;
//!
//! struct Signup { name: Option<String>, age: i64 }
//!
//! let chain = Chain::new("signup")
//!     .ensure("name", |s: &Signup| s.name.is_some(), || "missing name".to_string())
//!     .ensure("age", |s: &Signup| s.age >= 18, || "too young".to_string());
//!
//! let err = chain.run(&Signup { name: None, age: 3 }).unwrap_err();
//! assert_eq!(err, "missing name");
//! ```

use tracing::debug;

type CheckFn<'a, S, E> = Box<dyn Fn(&S) -> Result<(), E> + Send + Sync + 'a>;

struct Check<'a, S, E> {
    name: &'static str,
    run: CheckFn<'a, S, E>,
}

/// Ordered, short-circuiting list of checks.
pub struct Chain<'a, S, E> {
    name: &'static str,
    checks: Vec<Check<'a, S, E>>,
}

impl<'a, S, E> Chain<'a, S, E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    /// Appends a check that computes its own error.
    pub fn check<F>(mut self, name: &'static str, run: F) -> Self
    where
        F: Fn(&S) -> Result<(), E> + Send + Sync + 'a,
    {
        self.checks.push(Check {
            name,
            run: Box::new(run),
        });
        self
    }

    /// Appends a predicate; `error` builds the failure when it returns `false`.
    pub fn ensure<P, F>(self, name: &'static str, predicate: P, error: F) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'a,
        F: Fn() -> E + Send + Sync + 'a,
    {
        self.check(name, move |subject| {
            if predicate(subject) {
                Ok(())
            } else {
                Err(error())
            }
        })
    }

    /// Appends every check of `other`, after the ones already present.
    pub fn then(mut self, other: Chain<'a, S, E>) -> Self {
        self.checks.extend(other.checks);
        self
    }

    /// Check names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name).collect()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs the checks in order; the first failure ends the run.
    pub fn run(&self, subject: &S) -> Result<(), E> {
        for check in &self.checks {
            if let Err(e) = (check.run)(subject) {
                debug!(chain = self.name, check = check.name, "Check failed");
                return Err(e);
            }
        }
        Ok(())
    }
}
