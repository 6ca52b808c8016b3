use std::fmt;

use serde::{Deserialize, Serialize};

/// Federal Information Processing Standard county code, e.g. `1001` for
/// Autauga County, AL. Leading zeros are not significant on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fips(pub u32);

impl fmt::Display for Fips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Fips {
    fn from(value: u32) -> Self { Self(value) }
}

/// One county row of the education dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub fips: Fips,
    pub state: String,
    pub area_name: String,
    /// Percentage of adults with a bachelor's degree or higher, in [0, 100].
    #[serde(rename = "bachelorsOrHigher")]
    pub bachelors_or_higher: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{"fips":1001,"state":"AL","area_name":"Autauga County","bachelorsOrHigher":21.9}"#;
        let record: EducationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fips, Fips(1001));
        assert_eq!(record.state, "AL");
        assert_eq!(record.area_name, "Autauga County");
        assert_eq!(record.bachelors_or_higher, 21.9);
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{"fips":2,"state":"AK","area_name":"X","bachelorsOrHigher":5,"extra":true}"#;
        let record: EducationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.bachelors_or_higher, 5.0);
    }

    #[test]
    fn fips_displays_without_padding() {
        assert_eq!(Fips(1001).to_string(), "1001");
        assert_eq!(Fips(56045).to_string(), "56045");
    }
}
