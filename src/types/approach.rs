//! Close approach records

use super::neo::NearEarthObject;
use chrono::NaiveDateTime;
use std::fmt;
use std::sync::Arc;

/// A single close approach of a near-Earth object to Earth
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    /// Time of closest approach, in UTC
    pub time: NaiveDateTime,

    /// Nominal approach distance in astronomical units
    pub distance: f64,

    /// Velocity relative to Earth in km/s
    pub velocity: f64,

    /// The object making the approach
    pub neo: Arc<NearEarthObject>,
}

impl CloseApproach {
    /// Create a new CloseApproach
    pub fn new(
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
        neo: Arc<NearEarthObject>,
    ) -> Self {
        CloseApproach {
            time,
            distance,
            velocity,
            neo,
        }
    }

    /// Check that the record can be serialized
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the record is well formed
    /// * `Err(&str)` describing the first problem found
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.neo.designation.is_empty() {
            return Err("empty designation");
        }
        if !self.distance.is_finite() {
            return Err("non-finite distance");
        }
        if !self.velocity.is_finite() {
            return Err("non-finite velocity");
        }
        Ok(())
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time.format("%Y-%m-%d %H:%M"),
            self.neo.fullname(),
            self.distance,
            self.velocity
        )
    }
}
