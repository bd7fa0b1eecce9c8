use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode chart '{title}': {source}")]
    Encode {
        title: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("chart window failed: {0}")]
    Window(String),
}
