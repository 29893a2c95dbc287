//! Reads the items to search from files or stdin.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use memchr::memchr_iter;

use crate::{Error, Result};

/// One input record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Position of the item across all inputs
    pub index: usize,
    /// Raw bytes of the item, without its line ending
    pub text: Vec<u8>,
}

impl Item {
    /// The item as text, replacing invalid UTF-8
    pub fn text_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

/// Splits `buf` into records separated by `line_ending`.
///
/// A missing final separator still yields the last record. With `\n` endings, a
/// trailing `\r` is dropped from each record.
pub fn split_items(buf: &[u8], line_ending: u8) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    let ends = memchr_iter(line_ending, buf).chain(std::iter::once(buf.len()));
    ends.filter_map(move |end| {
        if start > buf.len() || (end == buf.len() && start == end) {
            return None;
        }
        let mut item = &buf[start..end];
        start = end + 1;
        if line_ending == b'\n' {
            item = item.strip_suffix(b"\r").unwrap_or(item);
        }
        Some(item)
    })
}

/// Collects items from inputs
#[derive(Debug, Clone)]
pub struct ItemReader {
    line_ending: u8,
}

impl Default for ItemReader {
    fn default() -> Self {
        Self { line_ending: b'\n' }
    }
}

impl ItemReader {
    /// Creates a reader splitting items on `line_ending`
    pub fn new(line_ending: u8) -> Self {
        Self { line_ending }
    }

    /// Reads every item of `files` in order, or of stdin when `files` is empty
    pub fn read_files(&self, files: &[PathBuf]) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        if files.is_empty() {
            self.read_into(std::io::stdin().lock(), None, &mut items)?;
        }
        for path in files {
            let file = File::open(path).map_err(|source| Error::Io {
                path: Some(path.clone()),
                source,
            })?;
            self.read_into(BufReader::new(file), Some(path), &mut items)?;
        }
        debug!("read {} items from {} input(s)", items.len(), files.len().max(1));
        Ok(items)
    }

    /// Reads all items of `source`, numbering them after the ones already in `items`
    pub fn read_into<R: Read>(&self, mut source: R, path: Option<&Path>, items: &mut Vec<Item>) -> Result<()> {
        let mut buf = Vec::new();
        source.read_to_end(&mut buf).map_err(|source| Error::Io {
            path: path.map(Path::to_path_buf),
            source,
        })?;

        for text in split_items(&buf, self.line_ending) {
            items.push(Item {
                index: items.len(),
                text: text.to_vec(),
            });
        }
        Ok(())
    }

    /// Reads the concatenation of all inputs as one text, for whole-input matching
    pub fn read_whole(&self, files: &[PathBuf]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        if files.is_empty() {
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|source| Error::Io { path: None, source })?;
        }
        for path in files {
            File::open(path)
                .and_then(|mut file| file.read_to_end(&mut buf))
                .map_err(|source| Error::Io {
                    path: Some(path.clone()),
                    source,
                })?;
        }
        Ok(buf)
    }
}
