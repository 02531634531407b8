use std::path::PathBuf;

/// Failures the icon driver reports to its caller.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A piece of the drawing/encoding stack was not compiled in.
    #[error("{component} is not available")]
    MissingDependency {
        component: &'static str,
        remedy: &'static str,
    },

    /// Anything that went wrong while encoding or writing a single icon.
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GenerateError {
    /// Actionable hint to show next to the error, if there is one.
    pub fn remedy(&self) -> Option<&'static str> {
        match self {
            GenerateError::MissingDependency { remedy, .. } => Some(*remedy),
            GenerateError::Write { .. } => None,
        }
    }
}
