use serde::{Deserialize, Serialize};

/// Allele ID of an empty call. Alleles with this ID are never stored in a locus.
pub const EMPTY_CALL: f64 = 0.0;

/// Allele ID of the Y allele at the amelogenin locus
pub const Y_ALLELE: f64 = -1.0;

/// Allele ID of the X allele at the amelogenin locus
pub const X_ALLELE: f64 = -2.0;

/// Allele ID of a call that could not be read (e.g. `OL` off-ladder peaks)
pub const UNREADABLE: f64 = -999.0;

/// A single peak observed at a locus
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Allele {
    /// Allele name as a number, e.g. 9.3, or one of the sentinel IDs
    pub id: f64,

    /// Peak area
    #[serde(default, skip_serializing_if = "is_zero")]
    pub area: f64,

    /// Peak height in rfu
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: f64,

    /// Fragment length
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: f64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl Allele {
    /// An allele carrying only its ID
    #[must_use]
    pub fn new(id: f64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: f64) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// The same allele with area, height and size dropped
    #[must_use]
    pub fn id_only(&self) -> Self {
        Self::new(self.id)
    }

    /// Textual name of this allele (see [`decode`])
    #[must_use]
    pub fn name(&self) -> String {
        decode(self.id)
    }
}

/// Convert an allele call to its numeric ID.
///
/// | Text            | ID     |
/// |-----------------|--------|
/// | `""`            | 0      |
/// | `X` / `x`       | -2     |
/// | `Y` / `y`       | -1     |
/// | finite decimal  | value  |
/// | anything else   | -999   |
///
/// # Examples
///
/// ```
/// use str_solver::core::allele::encode;
///
/// assert_eq!(encode("9.3"), 9.3);
/// assert_eq!(encode("X"), -2.0);
/// assert_eq!(encode("OL"), -999.0);
/// ```
#[must_use]
pub fn encode(text: &str) -> f64 {
    match text {
        "" => EMPTY_CALL,
        "X" | "x" => X_ALLELE,
        "Y" | "y" => Y_ALLELE,
        _ => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => UNREADABLE,
        },
    }
}

/// Convert a numeric allele ID back to its textual call.
///
/// The sentinels map back to `""`, `X`, `Y` and `NaN`; every other value is
/// written in its shortest round-trip decimal form (`18`, `9.3`).
#[must_use]
pub fn decode(id: f64) -> String {
    if id == EMPTY_CALL {
        String::new()
    } else if id == Y_ALLELE {
        "Y".to_string()
    } else if id == X_ALLELE {
        "X".to_string()
    } else if id == UNREADABLE {
        "NaN".to_string()
    } else {
        format!("{id}")
    }
}
