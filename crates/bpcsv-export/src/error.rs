use thiserror::Error;

/// Result type for bpcsv-export operations
pub type Result<T> = std::result::Result<T, Error>;

// Variants that wrap another error keep it out of their message; print the
// chain (`{:#}` with anyhow) to see the cause.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("XML error at byte {position}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("XML error: document ended inside <{0}>")]
    UnclosedElement(String),

    #[error("XML error: no root element found")]
    NoRootElement,

    #[error("XML error at byte {position}: content outside the root element")]
    OutsideRoot { position: u64 },

    #[error("XML error at byte {position}: '<' inside the <{tag}> tag")]
    InvalidTag { position: u64, tag: String },

    #[error("Entry '{type_tag}' is missing its '{attribute}' attribute")]
    MissingAttribute {
        type_tag: String,
        attribute: &'static str,
    },

    #[error(transparent)]
    Types(#[from] bpcsv_types::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),
}
