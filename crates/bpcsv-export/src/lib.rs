//! Blood pressure extraction from health data exports.
//!
//! The pipeline has three stages, each usable on its own:
//! - [`RecordStream`] pulls top-level items out of the export XML one at a time
//! - [`match_record`] pairs the systolic and diastolic entries of an item
//! - [`ObservationWriter`] writes the pairs as CSV
//!
//! [`export_observations`] wires them together with an [`ExportFilter`].
//!
//! # Example
//!
//! ```no_run
//! use bpcsv_export::{ExportFilter, ObservationWriter, RecordStream, export_observations};
//! use bpcsv_types::TypeIdentifiers;
//! use std::path::Path;
//!
//! let items = RecordStream::open(Path::new("export.xml"))?;
//! let filter = ExportFilter::new(Some("2023-06-01".parse()?));
//! let mut writer = ObservationWriter::new(std::io::stdout());
//! let summary = export_observations(items, &TypeIdentifiers::default(), &filter, &mut writer)?;
//! writer.finish()?;
//! println!("{} rows", summary.rows_written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod filter;
pub mod item;
pub mod matcher;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use error::{Error, Result};
pub use filter::ExportFilter;
pub use item::{Entry, ExportItem};
pub use matcher::{RECORD_TAG, RecordMatch, match_record};
pub use pipeline::{ExportSummary, export_observations};
pub use reader::{ITEM_DEPTH, RecordStream};
pub use writer::{HEADER, ObservationWriter};
