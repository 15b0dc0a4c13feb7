use autolist::application::error::AppError;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::invalid_input(format!("failed to render output: {e}")))?;
    println!("{out}");
    Ok(())
}

pub fn line(text: &str) {
    println!("{text}");
}
