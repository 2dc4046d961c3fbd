use std::{
    fmt,
    ops::{Add, AddAssign},
};

use serde::{Serialize, Serializer};

/// A traversal cost in fixed-point hundredths.
///
/// Road costs are integers and traffic factors are whole percentages, so every
/// predicted edge cost, path cost and heuristic bound is exact at two decimal
/// places. Ordering is plain integer ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub fn from_hundredths(hundredths: u64) -> Cost {
        Cost(hundredths)
    }

    /// Cost of traversing a road with base cost `base` at `percent` percent.
    pub fn scaled(base: u32, percent: u32) -> Cost {
        Cost(base as u64 * percent as u64)
    }

    pub fn hundredths(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        self.0 += rhs.0;
    }
}

// Always prints at least one fractional digit: 10.0, 9.0, 6.25, 4.5
impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let fraction = self.0 % 100;
        if fraction % 10 == 0 {
            write!(f, "{}.{}", units, fraction / 10)
        } else {
            write!(f, "{}.{:02}", units, fraction)
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
