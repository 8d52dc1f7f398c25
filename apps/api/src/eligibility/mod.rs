//! Eligibility filters: narrow a catalog to the records a student qualifies for.
//!
//! Both filters are pure: they read an immutable catalog snapshot and return
//! fresh vectors, so they can run from any number of request handlers at once.
//! Absent constraints always pass; that case is spelled out with `Constraint`.

pub mod colleges;
pub mod scholarships;
pub mod validation;

/// A one-sided bound that may be missing from the catalog record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint<T> {
    Unconstrained,
    AtLeast(T),
    AtMost(T),
}

impl<T: PartialOrd + Copy> Constraint<T> {
    /// Lower bound (e.g. a minimum percentage). `None` means unconstrained.
    pub fn at_least(bound: Option<T>) -> Self {
        bound.map_or(Constraint::Unconstrained, Constraint::AtLeast)
    }

    /// Upper bound (e.g. an income cap). `None` means unconstrained.
    pub fn at_most(bound: Option<T>) -> Self {
        bound.map_or(Constraint::Unconstrained, Constraint::AtMost)
    }

    pub fn admits(&self, value: T) -> bool {
        match *self {
            Constraint::Unconstrained => true,
            Constraint::AtLeast(min) => value >= min,
            Constraint::AtMost(max) => value <= max,
        }
    }
}
