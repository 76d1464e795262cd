use serde::{Deserialize, Serialize};

pub const SYSTOLIC_TYPE: &str = "HKQuantityTypeIdentifierBloodPressureSystolic";
pub const DIASTOLIC_TYPE: &str = "HKQuantityTypeIdentifierBloodPressureDiastolic";

/// The two halves of a blood pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Systolic,
    Diastolic,
}

/// Type identifiers that mark an entry as systolic or diastolic.
///
/// Defaults to the identifiers used by the Health app export; both can be
/// overridden from the `[identifiers]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeIdentifiers {
    pub systolic: String,
    pub diastolic: String,
}

impl Default for TypeIdentifiers {
    fn default() -> Self {
        Self {
            systolic: SYSTOLIC_TYPE.to_string(),
            diastolic: DIASTOLIC_TYPE.to_string(),
        }
    }
}

impl TypeIdentifiers {
    /// Classify an entry's `type` attribute
    pub fn classify(&self, type_tag: &str) -> Option<QuantityKind> {
        if type_tag == self.systolic {
            Some(QuantityKind::Systolic)
        } else if type_tag == self.diastolic {
            Some(QuantityKind::Diastolic)
        } else {
            None
        }
    }
}
