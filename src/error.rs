use crate::config::IconKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Source logo not found at: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to generate {kind} icon at {}: {source}", path.display())]
    Generation {
        kind: IconKind,
        path: PathBuf,
        #[source]
        source: GenerationFailure,
    },
}

impl IconError {
    pub(crate) fn generation(
        kind: IconKind,
        path: impl Into<PathBuf>,
        source: impl Into<GenerationFailure>,
    ) -> Self {
        IconError::Generation {
            kind,
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Underlying cause of a failed decode, resize, encode or write.
#[derive(Error, Debug)]
pub enum GenerationFailure {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_names_path() {
        let err = IconError::SourceNotFound {
            path: PathBuf::from("src/images/logo.png"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "Source logo not found at: src/images/logo.png");
    }

    #[test]
    fn test_generation_error_names_kind_and_output() {
        let err = IconError::generation(
            IconKind::Maskable,
            "out/icon-maskable.png",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("maskable icon"));
        assert!(message.contains("out/icon-maskable.png"));
        assert!(matches!(
            err,
            IconError::Generation { source: GenerationFailure::Io(_), .. }
        ));
    }
}
