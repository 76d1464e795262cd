//! Pull-based streaming over the top-level items of an export document.
//!
//! The Health app export is a single `<HealthData>` root holding hundreds of
//! thousands of children. [`RecordStream`] walks the document with a pull
//! parser and hands out one [`ExportItem`] per root child, so memory stays
//! proportional to a single item no matter how large the file is.

use crate::item::{Entry, ExportItem};
use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Nesting depth of the elements yielded as items (children of the root)
pub const ITEM_DEPTH: usize = 2;

/// Lazy, non-restartable sequence of export items.
///
/// The first error ends the sequence.
pub struct RecordStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    open: Vec<String>,
    current: Option<ExportItem>,
    root_seen: bool,
    finished: bool,
}

impl RecordStream<BufReader<File>> {
    /// Open an export file for streaming
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: Reader::from_reader(inner),
            buf: Vec::new(),
            open: Vec::new(),
            current: None,
            root_seen: false,
            finished: false,
        }
    }

    fn next_item(&mut self) -> Result<Option<ExportItem>> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => return Err(xml_error(&self.reader, source)),
            };

            match event {
                Event::Start(e) => {
                    check_tag(&self.reader, &e)?;
                    let tag = element_name(&e);
                    let depth = self.open.len() + 1;
                    if depth == 1 {
                        if self.root_seen {
                            return Err(outside_root(&self.reader));
                        }
                        self.root_seen = true;
                    } else if depth == ITEM_DEPTH {
                        self.current = Some(ExportItem {
                            tag: tag.clone(),
                            entries: Vec::new(),
                        });
                    } else if depth == ITEM_DEPTH + 1 {
                        let attributes =
                            read_attributes(&e).map_err(|s| xml_error(&self.reader, s))?;
                        if let Some(item) = self.current.as_mut() {
                            item.entries.push(Entry {
                                tag: tag.clone(),
                                attributes,
                            });
                        }
                    }
                    self.open.push(tag);
                }
                Event::Empty(e) => {
                    check_tag(&self.reader, &e)?;
                    let depth = self.open.len() + 1;
                    if depth == 1 {
                        if self.root_seen {
                            return Err(outside_root(&self.reader));
                        }
                        self.root_seen = true;
                    } else if depth == ITEM_DEPTH {
                        return Ok(Some(ExportItem {
                            tag: element_name(&e),
                            entries: Vec::new(),
                        }));
                    } else if depth == ITEM_DEPTH + 1 {
                        let attributes =
                            read_attributes(&e).map_err(|s| xml_error(&self.reader, s))?;
                        if let Some(item) = self.current.as_mut() {
                            item.entries.push(Entry {
                                tag: element_name(&e),
                                attributes,
                            });
                        }
                    }
                }
                Event::End(_) => {
                    let depth = self.open.len();
                    self.open.pop();
                    if depth == ITEM_DEPTH {
                        if let Some(item) = self.current.take() {
                            return Ok(Some(item));
                        }
                    }
                }
                Event::Text(e) if self.open.is_empty() => {
                    if e.iter().any(|b| !b.is_ascii_whitespace()) {
                        return Err(outside_root(&self.reader));
                    }
                }
                Event::CData(_) if self.open.is_empty() => {
                    return Err(outside_root(&self.reader));
                }
                Event::Eof => {
                    if let Some(tag) = self.open.last() {
                        return Err(Error::UnclosedElement(tag.clone()));
                    }
                    if !self.root_seen {
                        return Err(Error::NoRootElement);
                    }
                    return Ok(None);
                }
                // Comments, processing instructions, declarations, the DOCTYPE
                // and character data inside the root carry nothing we read
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<ExportItem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_item() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for RecordStream<R> {}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

// quick-xml does not check the characters of attribute values; a raw `<`
// is never legal inside a tag.
fn check_tag<R>(reader: &Reader<R>, e: &BytesStart<'_>) -> Result<()> {
    if e.attributes_raw().contains(&b'<') {
        return Err(Error::InvalidTag {
            position: reader.buffer_position() as u64,
            tag: element_name(e),
        });
    }
    Ok(())
}

fn read_attributes(e: &BytesStart<'_>) -> std::result::Result<Vec<(String, String)>, quick_xml::Error> {
    e.attributes()
        .map(|attr| {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            Ok((key, value))
        })
        .collect()
}

fn outside_root<R>(reader: &Reader<R>) -> Error {
    Error::OutsideRoot {
        position: reader.buffer_position() as u64,
    }
}

fn xml_error<R>(reader: &Reader<R>, source: quick_xml::Error) -> Error {
    Error::Xml {
        position: reader.buffer_position() as u64,
        source,
    }
}
