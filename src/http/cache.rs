//! Freshness validation module
//!
//! A graph's freshness token is its source file's mtime in whole seconds,
//! printed as a decimal string. Clients echo the token back through
//! `If-None-Match`; comparison is exact string equality, nothing more.

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// `Cache-Control` sent with every rendered document.
pub const CACHE_CONTROL: &str = "no-cache, public, max-age=31536000, must-revalidate";

/// Compute the freshness token for a source file.
///
/// Fails when the file cannot be stat'ed; the request boundary turns that
/// into a 500, so a missing graph surfaces as a server error, not a 404.
pub async fn compute_etag(path: &Path) -> io::Result<String> {
    let metadata = tokio::fs::metadata(path).await?;
    let modified = metadata.modified()?;
    let seconds = modified
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    Ok(seconds.to_string())
}

/// Check whether the client already holds the current revision.
///
/// Exact equality against the raw `If-None-Match` value; no wildcards, no
/// comma-separated lists, no quote stripping.
#[must_use]
pub fn etag_matches(etag: &str, if_none_match: Option<&str>) -> bool {
    if_none_match == Some(etag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    fn set_mtime(path: &Path, seconds: u64) {
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(seconds))
            .unwrap();
    }

    #[tokio::test]
    async fn test_etag_is_whole_second_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        fs::write(&path, "digraph {}").unwrap();
        set_mtime(&path, 1_700_000_000);

        assert_eq!(compute_etag(&path).await.unwrap(), "1700000000");
    }

    #[tokio::test]
    async fn test_etag_stable_until_modified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        fs::write(&path, "digraph {}").unwrap();
        set_mtime(&path, 1_000);

        let first = compute_etag(&path).await.unwrap();
        let second = compute_etag(&path).await.unwrap();
        assert_eq!(first, second);

        set_mtime(&path, 2_000);
        let third = compute_etag(&path).await.unwrap();
        assert_ne!(first, third);
        assert_eq!(third, "2000");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = compute_etag(&dir.path().join("absent.dot"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_etag_match_is_exact_equality() {
        assert!(etag_matches("1700000000", Some("1700000000")));
        assert!(!etag_matches("1700000000", Some("\"1700000000\"")));
        assert!(!etag_matches("1700000000", Some("*")));
        assert!(!etag_matches("1700000000", Some("1700000000, 42")));
        assert!(!etag_matches("1700000000", None));
    }
}
