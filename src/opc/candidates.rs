//! Ordered candidate lookup over archive entries

use crate::error::Result;
use std::collections::HashMap;

/// Something that can hand out archive entries by name
///
/// Implemented by [`super::Package`]; the in-memory `HashMap` implementation
/// is convenient for exercising extractors without building a ZIP.
pub trait EntrySource {
    /// Read an entry, returning `Ok(None)` if it does not exist
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>>;
}

impl EntrySource for HashMap<String, Vec<u8>> {
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(name).cloned())
    }
}

/// Decode the first candidate entry that exists and decodes successfully
///
/// Candidates are tried in order. Missing entries are skipped silently; entries
/// that cannot be read or whose `decode` fails are logged and skipped. Returns
/// the winning entry name with its decoded value, or `None` when every
/// candidate was exhausted.
pub fn first_successful<S, T, F>(
    source: &mut S,
    candidates: &[&'static str],
    mut decode: F,
) -> Option<(&'static str, T)>
where
    S: EntrySource + ?Sized,
    F: FnMut(&str, Vec<u8>) -> Result<T>,
{
    for &name in candidates {
        let bytes = match source.read_entry(name) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                log::debug!("Candidate '{}' not present", name);
                continue;
            }
            Err(e) => {
                log::warn!("Could not read '{}': {}", name, e);
                continue;
            }
        };

        match decode(name, bytes) {
            Ok(value) => return Some((name, value)),
            Err(e) => log::warn!("Skipping '{}': {}", name, e),
        }
    }

    None
}

/// Read the first candidate entry that exists
///
/// Only missing entries are skipped. The first entry present in the archive
/// decides, so a read failure on it is returned instead of moving on. `None`
/// means no candidate exists.
pub fn first_present<S>(
    source: &mut S,
    candidates: &[&'static str],
) -> Option<(&'static str, Result<Vec<u8>>)>
where
    S: EntrySource + ?Sized,
{
    for &name in candidates {
        match source.read_entry(name) {
            Ok(None) => log::debug!("Candidate '{}' not present", name),
            Ok(Some(bytes)) => return Some((name, Ok(bytes))),
            Err(e) => return Some((name, Err(e))),
        }
    }

    None
}
