//! Application error module
//!
//! One enum covers every way a request can fail. The request boundary
//! turns any variant into the flat 500 response, whose body carries the
//! variant's kind name followed by its message.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while answering a single request.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The external renderer could not be started or exited unsuccessfully.
    #[error("{0}")]
    Render(String),

    /// File system access failed (source metadata, directory listing).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The request query string was malformed.
    #[error("{0}")]
    Query(String),

    /// A response could not be assembled from a dynamic header value.
    #[error(transparent)]
    Http(#[from] hyper::http::Error),

    /// A routing contract was broken (wrong capture count or token).
    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    /// Stable class name exposed in 500 response bodies.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Render(_) => "RenderError",
            Self::Io(_) => "IOError",
            Self::Query(_) => "QueryError",
            Self::Http(_) => "HttpError",
            Self::Internal(_) => "InternalError",
        }
    }

    /// File system error carrying the path it happened on, so the 500
    /// body names the file and not just the OS error.
    pub fn io_at(path: &Path, err: io::Error) -> Self {
        Self::Io(io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(HandlerError::Render(String::new()).kind(), "RenderError");
        assert_eq!(
            HandlerError::Io(io::Error::other("boom")).kind(),
            "IOError"
        );
        assert_eq!(HandlerError::Query(String::new()).kind(), "QueryError");
        let build_err = hyper::Response::builder()
            .header("Refresh", "\n")
            .body(())
            .unwrap_err();
        assert_eq!(HandlerError::Http(build_err).kind(), "HttpError");
        assert_eq!(HandlerError::Internal(String::new()).kind(), "InternalError");
    }

    #[test]
    fn test_io_at_names_the_path() {
        let err = HandlerError::io_at(
            Path::new("graphs/missing.dot"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let message = err.to_string();
        assert!(message.contains("graphs/missing.dot"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_render_message_passes_through() {
        let err = HandlerError::Render("`dot` failed (exit status: 1): bad input".to_string());
        assert_eq!(err.to_string(), "`dot` failed (exit status: 1): bad input");
    }
}
