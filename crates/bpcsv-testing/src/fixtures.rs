//! Synthetic health data exports.
//!
//! Builds documents shaped like the Health app's `export.xml`: a
//! `<HealthData>` root with blood pressure readings stored as `Correlation`
//! items, each holding a systolic and a diastolic `Record`.

use anyhow::Result;
use bpcsv_types::{DIASTOLIC_TYPE, SYSTOLIC_TYPE};
use std::path::Path;

const CORRELATION_TYPE: &str = "HKCorrelationTypeIdentifierBloodPressure";
const SOURCE: &str = r#"sourceName="Health" sourceVersion="16.5" unit="mmHg""#;

/// Builder for an export document.
#[derive(Debug, Clone, Default)]
pub struct ExportDocument {
    items: Vec<String>,
}

impl ExportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete reading: one correlation with both records.
    pub fn blood_pressure(self, start: &str, systolic: &str, diastolic: &str) -> Self {
        let records = format!(
            "{}\n{}",
            record(DIASTOLIC_TYPE, diastolic, start),
            record(SYSTOLIC_TYPE, systolic, start)
        );
        self.correlation(start, &records)
    }

    /// A correlation that only carries the systolic record.
    pub fn systolic_only(self, start: &str, systolic: &str) -> Self {
        let records = record(SYSTOLIC_TYPE, systolic, start);
        self.correlation(start, &records)
    }

    /// A correlation that only carries the diastolic record.
    pub fn diastolic_only(self, start: &str, diastolic: &str) -> Self {
        let records = record(DIASTOLIC_TYPE, diastolic, start);
        self.correlation(start, &records)
    }

    /// A standalone quantity record directly under the root.
    pub fn quantity(mut self, type_tag: &str, value: &str, start: &str) -> Self {
        self.items.push(format!(
            r#" <Record type="{type_tag}" {SOURCE} creationDate="{start}" startDate="{start}" endDate="{start}" value="{value}"/>"#
        ));
        self
    }

    /// Append raw XML as a root child.
    pub fn raw(mut self, xml: &str) -> Self {
        self.items.push(xml.to_string());
        self
    }

    fn correlation(mut self, start: &str, records: &str) -> Self {
        self.items.push(format!(
            r#" <Correlation type="{CORRELATION_TYPE}" sourceName="Health" creationDate="{start}" startDate="{start}" endDate="{start}">
  <MetadataEntry key="HKWasUserEntered" value="1"/>
{records}
 </Correlation>"#
        ));
        self
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE HealthData [
<!ELEMENT HealthData (ExportDate,Me,(Record|Correlation|Workout)*)>
<!ATTLIST HealthData locale CDATA #REQUIRED>
]>
<HealthData locale="en_US">
 <ExportDate value="2023-07-01 10:00:00 -0700"/>
 <Me HKCharacteristicTypeIdentifierDateOfBirth="" HKCharacteristicTypeIdentifierBiologicalSex="HKBiologicalSexNotSet"/>
"#,
        );
        for item in &self.items {
            xml.push_str(item);
            xml.push('\n');
        }
        xml.push_str("</HealthData>\n");
        xml
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_xml())?;
        Ok(())
    }
}

fn record(type_tag: &str, value: &str, start: &str) -> String {
    format!(
        r#"  <Record type="{type_tag}" {SOURCE} creationDate="{start}" startDate="{start}" endDate="{start}" value="{value}">
   <MetadataEntry key="HKWasUserEntered" value="1"/>
  </Record>"#
    )
}
