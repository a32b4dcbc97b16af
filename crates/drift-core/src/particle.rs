//! The [`Particle`] trajectory sample.

use glam::DVec3;
use indexmap::IndexMap;

/// One sample along a particle trajectory.
///
/// Integration always produces a particle with a defined position and time.
/// The value slot and the property map start out unset and are filled only
/// by an explicit sampling pass over the finished trajectory; `NaN` marks an
/// unset value.
///
/// Property iteration order is insertion order, so enumerating property
/// names is deterministic across runs.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Position in field coordinates.
    pub position: DVec3,
    /// Simulation time of this sample.
    pub time: f64,
    value: f64,
    properties: IndexMap<String, f64>,
}

impl Particle {
    /// Create a particle at `position` and `time` with an unset value and
    /// no properties.
    pub fn new(position: DVec3, time: f64) -> Self {
        Self {
            position,
            time,
            value: f64::NAN,
            properties: IndexMap::new(),
        }
    }

    /// The sampled value, or `NaN` if no sampling pass has written it.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `true` if the value slot holds a sampled (non-NaN) value.
    pub fn has_value(&self) -> bool {
        !self.value.is_nan()
    }

    /// Write the value slot.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Reset the value slot to unset (`NaN`).
    pub fn clear_value(&mut self) {
        self.value = f64::NAN;
    }

    /// Look up a property by name. Absent names return `None`; a stored
    /// `NaN` is returned as-is and also means "unset".
    pub fn property(&self, name: &str) -> Option<f64> {
        self.properties.get(name).copied()
    }

    /// Write a property, overwriting any previous value under `name`.
    /// A new name is appended to the enumeration order.
    pub fn set_property(&mut self, name: impl Into<String>, value: f64) {
        self.properties.insert(name.into(), value);
    }

    /// Remove a property, preserving the order of the remaining names.
    /// Returns the removed value, or `None` if the name was absent.
    pub fn remove_property(&mut self, name: &str) -> Option<f64> {
        self.properties.shift_remove(name)
    }

    /// Remove all properties.
    pub fn clear_properties(&mut self) {
        self.properties.clear();
    }

    /// Property names in insertion order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of stored properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
