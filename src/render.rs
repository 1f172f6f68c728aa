//! Renderer adapter module
//!
//! Invokes the external Graphviz binary once per request and hands back
//! whatever it wrote to stdout. No retries, no timeout, no output cap; a
//! hung tool blocks only the request that invoked it.

use std::path::Path;

use hyper::body::Bytes;
use tokio::process::Command;

use crate::error::HandlerError;

/// Output formats the server knows how to ask the renderer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Parse a captured route token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "svg" => Some(Self::Svg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Token as passed to the renderer's `-T` flag.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Content type sent with a rendered document.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml; charset=US-ASCII",
            Self::Png => "image/png",
        }
    }
}

/// Run `{renderer} {source} -T{format}` and capture the rendered bytes.
///
/// Both failure shapes surface as [`HandlerError::Render`]: a spawn
/// failure carries the OS error, a non-zero exit carries the command, the
/// exit status, and the tool's stderr so the diagnostic reaches the
/// client.
pub async fn render(
    renderer: &str,
    source: &Path,
    format: OutputFormat,
) -> Result<Bytes, HandlerError> {
    let output = Command::new(renderer)
        .arg(source)
        .arg(format!("-T{}", format.token()))
        .output()
        .await
        .map_err(|e| HandlerError::Render(format!("failed to run `{renderer}`: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut diagnostic = stderr.trim();
        if diagnostic.is_empty() {
            diagnostic = "no diagnostic output";
        }
        return Err(HandlerError::Render(format!(
            "`{renderer} {} -T{}` failed ({}): {diagnostic}",
            source.display(),
            format.token(),
            output.status,
        )));
    }

    Ok(Bytes::from(output.stdout))
}
