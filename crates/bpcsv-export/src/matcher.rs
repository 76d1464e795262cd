use crate::item::{Entry, ExportItem};
use crate::{Error, Result};
use bpcsv_types::{PairedObservation, QuantityKind, TypeIdentifiers, parse_start_date};
use chrono::{DateTime, FixedOffset};

/// Tag of the quantity entries inside a correlation
pub const RECORD_TAG: &str = "Record";

/// Outcome of inspecting one export item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordMatch {
    /// Both halves were present
    Paired(PairedObservation),
    /// Only one of systolic/diastolic was present
    Incomplete,
    /// No blood pressure entries at all
    Unrelated,
}

/// Look for a systolic and a diastolic entry in `item`.
///
/// A later entry of the same kind replaces an earlier one. The timestamp of
/// the pair is the systolic entry's `startDate`.
pub fn match_record(item: &ExportItem, ids: &TypeIdentifiers) -> Result<RecordMatch> {
    let mut systolic: Option<(&str, DateTime<FixedOffset>)> = None;
    let mut diastolic: Option<&str> = None;

    for entry in item.entries_named(RECORD_TAG) {
        let Some(type_tag) = entry.attr("type") else {
            continue;
        };
        match ids.classify(type_tag) {
            Some(QuantityKind::Systolic) => {
                let value = required_attr(entry, type_tag, "value")?;
                let start = parse_start_date(required_attr(entry, type_tag, "startDate")?)?;
                systolic = Some((value, start));
            }
            Some(QuantityKind::Diastolic) => {
                diastolic = Some(required_attr(entry, type_tag, "value")?);
            }
            None => {}
        }
    }

    Ok(match (systolic, diastolic) {
        (Some((systolic, timestamp)), Some(diastolic)) => {
            RecordMatch::Paired(PairedObservation {
                timestamp,
                diastolic: diastolic.to_string(),
                systolic: systolic.to_string(),
            })
        }
        (None, None) => RecordMatch::Unrelated,
        _ => RecordMatch::Incomplete,
    })
}

fn required_attr<'a>(entry: &'a Entry, type_tag: &str, attribute: &'static str) -> Result<&'a str> {
    entry.attr(attribute).ok_or_else(|| Error::MissingAttribute {
        type_tag: type_tag.to_string(),
        attribute,
    })
}
