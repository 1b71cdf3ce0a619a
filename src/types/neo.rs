//! Near-Earth object descriptor
//!
//! A `NearEarthObject` is shared by every close approach it makes, so the
//! approaches hold it behind an `Arc`.

use std::fmt;

/// A near-Earth object
///
/// Unknown values have exactly one representation: `None`. Use
/// [`NearEarthObject::new`] to build one from raw values, which folds blank
/// names and NaN diameters into `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    /// Primary designation, e.g. `433` or `2020 AB`
    pub designation: String,

    /// IAU name, if the object has one
    pub name: Option<String>,

    /// Diameter in kilometers, if known (writers also treat `Some(NaN)` as unknown)
    pub diameter: Option<f64>,

    /// Whether the object is classified as potentially hazardous
    pub hazardous: bool,
}

impl NearEarthObject {
    /// Create a new NearEarthObject from raw values
    ///
    /// # Arguments
    ///
    /// * `designation` - Primary designation (surrounding whitespace is trimmed)
    /// * `name` - IAU name; `None`, empty or whitespace-only means no name
    /// * `diameter` - Diameter in km; `None` or NaN means unknown
    /// * `hazardous` - Potentially hazardous classification
    pub fn new(
        designation: impl Into<String>,
        name: Option<&str>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        let designation: String = designation.into();
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let diameter = diameter.filter(|d| !d.is_nan());

        NearEarthObject {
            designation: designation.trim().to_string(),
            name,
            diameter,
            hazardous,
        }
    }

    /// Full name: `"<designation> (<name>)"`, or the designation alone
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        if let Some(diameter) = self.diameter.filter(|d| !d.is_nan()) {
            write!(f, " has a diameter of {:.3} km and", diameter)?;
        }
        if self.hazardous {
            write!(f, " is potentially hazardous.")
        } else {
            write!(f, " is not potentially hazardous.")
        }
    }
}
