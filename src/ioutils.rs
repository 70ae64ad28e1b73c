use std::path::Path;

use crate::error::{Error, Result};

fn process_error<P: AsRef<Path>>(path: P, e: std::io::Error) -> Error {
    Error::ProcessError { source_path: path.as_ref().display().to_string(), e: e.to_string() }
}

pub fn read_file<P: AsRef<Path>>(source_path: P) -> Result<String> {
    let source_path = source_path.as_ref();
    std::fs::read_to_string(source_path).map_err(|e| process_error(source_path, e))
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content).map_err(|e| process_error(dest_path, e))
}

pub fn rename_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| process_error(parent, e))?;
    }
    std::fs::rename(source_path, dest_path).map_err(|e| process_error(source_path, e))
}

pub fn remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::remove_file(path).map_err(|e| process_error(path, e))
}

/// Parses predefined answers, which must form a JSON object.
pub fn parse_answers(buf: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str(buf)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::AnswersTypeError(other.to_string())),
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
