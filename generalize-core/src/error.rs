use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralizeError {
    #[error("No JSON strings provided")]
    EmptyInput,
    #[error("Invalid JSON input at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, GeneralizeError>;

impl GeneralizeError {
    /// Wrap a parse failure, shifting its line by the number of lines that precede
    /// the failing document in the original input.
    pub(crate) fn invalid_json(err: &serde_json::Error, line_offset: usize) -> Self {
        let text = err.to_string();
        // serde_json appends its own " at line L column C" suffix
        let message = text
            .rsplit_once(" at line ")
            .map(|(msg, _)| msg.to_string())
            .unwrap_or(text);
        GeneralizeError::InvalidJson {
            line: err.line() + line_offset,
            column: err.column(),
            message,
        }
    }
}
