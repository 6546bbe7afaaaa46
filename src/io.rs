use glob::glob;
use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::coco::AnnotationDocument;

/// One directory entry matched by [`list_files`].
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// Directory the file was found in.
    pub dir: PathBuf,
    /// Bare file name, preserved between source and destination.
    pub name: String,
}

/// List the entries of `dir` whose name ends with `suffix`. The order is
/// whatever the listing yields; callers must not depend on it.
pub fn list_files(dir: &Path, suffix: &str) -> io::Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Not a directory: {}", dir.display()),
        ));
    }

    let pattern = format!("{}/*{}", dir.display(), suffix);
    let entries = glob(&pattern).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| e.into_error())?;
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|s| s.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };
        files.push(FileEntry {
            path: path.clone(),
            dir: dir.to_path_buf(),
            name,
        });
    }
    Ok(files)
}

/// Create `path` and any missing parents. A directory that already exists is
/// success; any other failure is logged and returned to the caller.
pub fn ensure_directory(path: &Path) -> io::Result<()> {
    if let Err(e) = fs::create_dir_all(path) {
        if e.kind() == io::ErrorKind::AlreadyExists {
            return Ok(());
        }
        warn!("Failed to create directory {}: {}", path.display(), e);
        return Err(e);
    }
    Ok(())
}

/// Best-effort removal of a destination directory before a fresh write. A
/// destination that does not exist yet is the common case, not an error.
pub fn clear_directory(path: &Path) {
    if let Err(e) = fs::remove_dir_all(path) {
        debug!("Skipped clearing {}: {}", path.display(), e);
    }
}

/// Load one annotation document, turning a parse failure into a distinct
/// error that names the offending file.
pub fn read_annotation_document(path: &Path) -> io::Result<AnnotationDocument> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Malformed annotation document {}: {}", path.display(), e),
        )
    })
}

/// Write `doc` as `dir/name`, creating `dir` first. The output is
/// pretty-printed with 4-space indentation and stable key order.
pub fn write_annotation_document(
    doc: &AnnotationDocument,
    dir: &Path,
    name: &str,
) -> io::Result<()> {
    ensure_directory(dir)?;
    let file = File::create(dir.join(name))?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    doc.serialize(&mut serializer).map_err(io::Error::from)
}
