/// CLI processing errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: std::io::Error },

    #[error("failed to parse report document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown priority label '{label}' for '{scope}'")]
    UnknownPriority { label: String, scope: String },

    #[error("unsupported report document layout: {reason}")]
    Layout { reason: String },
}

impl CliError {
    pub fn read_failed(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn layout(reason: &str) -> Self {
        Self::Layout {
            reason: reason.to_string(),
        }
    }
}
