//! HTTP response building module
//!
//! One builder per response shape the handlers produce. Builders surface
//! header assembly failures to the caller; only the 500 builder, the
//! request boundary's last resort, is infallible.

use hyper::body::Bytes;
use hyper::Response;

use crate::error::HandlerError;
use crate::http::body::{self, ResponseBody};
use crate::http::cache::CACHE_CONTROL;

/// Build 200 response carrying the index document
pub fn build_html_response(content: String) -> Result<Response<ResponseBody>, hyper::http::Error> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=US-ASCII")
        .body(body::full(content))
}

/// Build 200 response carrying rendered image bytes and validation headers
pub fn build_image_response(
    data: Bytes,
    content_type: &'static str,
    etag: &str,
    refresh: Option<&str>,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", CACHE_CONTROL)
        .header("Etag", etag);

    if let Some(seconds) = refresh {
        builder = builder.header("Refresh", seconds);
    }

    builder.body(body::full(data))
}

/// Build 304 Not Modified response
pub fn build_not_modified_response(
    etag: &str,
    refresh: Option<&str>,
) -> Result<Response<ResponseBody>, hyper::http::Error> {
    let mut builder = Response::builder()
        .status(304)
        .header("Cache-Control", CACHE_CONTROL)
        .header("Etag", etag);

    if let Some(seconds) = refresh {
        builder = builder.header("Refresh", seconds);
    }

    builder.body(body::empty())
}

/// Build 404 Not Found response naming the unmatched path
pub fn build_404_response(path: &str) -> Result<Response<ResponseBody>, hyper::http::Error> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(body::chunks([
            Bytes::from_static(b"404 Not Found"),
            Bytes::from_static(b"\n\n"),
            Bytes::from(path.to_string()),
        ]))
}

/// Build 500 response naming the failure's kind and message.
///
/// Infallible: a header assembly failure here degrades to a bare 500
/// with an empty body.
pub fn build_500_response(err: &HandlerError) -> Response<ResponseBody> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(body::chunks([
            Bytes::from_static(b"500 Internal Server Error\n\n"),
            Bytes::from_static(err.kind().as_bytes()),
            Bytes::from_static(b": "),
            Bytes::from(err.to_string()),
        ]))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut fallback = Response::new(body::empty());
            *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
