use std::fs;
use std::path::PathBuf;

use autolist::application::error::AppError;

/// Inline value or file contents; the file wins when both are given.
pub fn read_value(val: Option<String>, file: Option<PathBuf>) -> Result<String, AppError> {
    if let Some(path) = file {
        let data = fs::read_to_string(&path).map_err(|source| AppError::InputFile {
            path: path.display().to_string(),
            source,
        })?;
        Ok(data)
    } else if let Some(v) = val {
        Ok(v)
    } else {
        Err(AppError::invalid_input("value required"))
    }
}
