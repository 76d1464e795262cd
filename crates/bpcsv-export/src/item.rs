/// One top-level element of the export (a direct child of the document
/// root), such as a `Correlation` or a standalone `Record`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportItem {
    pub tag: String,
    /// Direct children of the item, in document order
    pub entries: Vec<Entry>,
}

/// A child element of an [`ExportItem`], e.g. one `Record` of a correlation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl ExportItem {
    /// Entries with the given tag
    pub fn entries_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.tag == tag)
    }
}

impl Entry {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
