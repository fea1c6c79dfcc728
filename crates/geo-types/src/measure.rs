use serde::{Deserialize, Serialize};

/// One input field the calculator asks the user to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    /// Key used in the dimension input set, e.g. "radius".
    pub key: String,
    /// Label shown next to the field, e.g. "Radius (r)".
    pub label: String,
}

impl InputField {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A single computed quantity in a calculation result.
///
/// Values are full-precision f64; rounding for display is the UI's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub label: String,
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(label: impl Into<String>, value: f64, unit: Unit) -> Self {
        Self {
            label: label.into(),
            value,
            unit,
        }
    }
}

/// Dimension of a computed quantity. Serializes to the literal unit
/// strings the UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "units")]
    Linear,
    #[serde(rename = "sq units")]
    Square,
    #[serde(rename = "cubic units")]
    Cubic,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Linear => "units",
            Unit::Square => "sq units",
            Unit::Cubic => "cubic units",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
