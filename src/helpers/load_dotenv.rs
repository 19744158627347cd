use std::path::PathBuf;

/// Load a local `.env` file if one exists, returning its path.
///
/// Runs before the logger is configured, so that `LOGGING_LEVEL` may be
/// set from the file; the caller logs the outcome.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}
