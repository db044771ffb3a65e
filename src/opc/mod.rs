//! Archive access for 3MF containers
//!
//! 3MF files are ZIP archives. The analyzer only needs to read a handful of
//! conventionally named parts, so this module exposes a small capability:
//! read an entry by name, with "not present" reported as `Ok(None)` rather
//! than as an error.

mod candidates;
mod reader;
mod thumbnail;

pub use candidates::{EntrySource, first_present, first_successful};
pub use reader::Package;
pub use thumbnail::{ImageFormat, THUMBNAIL_CANDIDATES, extract_thumbnail};

/// Main 3D model file path within the 3MF archive
pub const MODEL_PATH: &str = "3D/3dmodel.model";

/// Print settings XML candidates, in lookup order
pub const PRINT_SETTINGS_CANDIDATES: [&str; 3] = [
    "Metadata/print_settings.xml",
    "Metadata/slice_settings.xml",
    "print_settings.xml",
];

/// Vendor metadata JSON candidates, in lookup order
pub const VENDOR_METADATA_CANDIDATES: [&str; 4] = [
    "Metadata/plate_1.json",
    "Metadata/slice_info.json",
    "plate_1.json",
    "slice_info.json",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_package_constants() {
        assert_eq!(MODEL_PATH, "3D/3dmodel.model");
        assert_eq!(PRINT_SETTINGS_CANDIDATES[0], "Metadata/print_settings.xml");
        assert_eq!(VENDOR_METADATA_CANDIDATES[3], "slice_info.json");
    }

    #[test]
    fn test_package_from_empty_zip() {
        let buffer = Vec::new();
        let cursor = Cursor::new(buffer);
        let zip = ZipWriter::new(cursor);
        let cursor = zip.finish().unwrap();

        // An empty archive is still an archive
        let mut package = Package::open(cursor).unwrap();
        assert!(package.is_empty());
        assert_eq!(package.read_entry(MODEL_PATH).unwrap(), None);
    }

    #[test]
    fn test_package_rejects_non_zip() {
        let result = Package::from_bytes(b"definitely not a zip".to_vec());
        assert!(matches!(result, Err(crate::Error::NotAnArchive(_))));
    }

    #[test]
    fn test_read_entry() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file("Metadata/plate_1.json", options).unwrap();
        zip.write_all(b"{}").unwrap();
        let cursor = zip.finish().unwrap();

        let mut package = Package::open(cursor).unwrap();
        assert_eq!(package.len(), 1);
        assert!(package.has_entry("Metadata/plate_1.json"));
        assert!(!package.has_entry("plate_1.json"));
        assert_eq!(
            package.read_entry("Metadata/plate_1.json").unwrap(),
            Some(b"{}".to_vec())
        );
        assert_eq!(package.entry_names(), vec!["Metadata/plate_1.json"]);
    }
}
