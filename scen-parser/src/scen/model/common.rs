//! Small composite values shared by every data kind

use serde::Serialize;
use std::fmt;

/// A calendar timestamp. Fields left out of the source default to zero;
/// `month` and `day` are stored 1-based (the source counts from zero).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}:{:02}",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// Composite identifier `{ type = N id = M }` used to reference polymorphic
/// entities (leaders, ministers, units, treaties, …) by category plus index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeId {
    pub ty: i32,
    pub id: i32,
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.ty, self.id)
    }
}

/// An `{ x = N y = M }` coordinate pair (tech-tree layout positions).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
