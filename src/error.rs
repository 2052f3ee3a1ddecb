use std::io;

use thiserror::Error;

/// Fatal, run-ending errors. Malformed script lines never produce one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: {program} <script>")]
    Usage { program: String },

    #[error("open: {}", os_message(.0))]
    Open(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// `perror` style: the OS text without the " (os error N)" suffix.
fn os_message(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .unwrap_or(&text)
            .to_string(),
        None => text,
    }
}
