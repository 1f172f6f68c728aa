//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: builds the per-request context,
//! dispatches on the route table, and turns any handler failure into the
//! 500 response. The boundary is per request; one failure never touches
//! another connection.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Local;
use hyper::body::Body as _;
use hyper::{Request, Response, Version};

use crate::config::AppState;
use crate::error::HandlerError;
use crate::handler::{image, index};
use crate::http::{self, query, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, RouteTarget};

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: HashMap<String, String>,
    pub if_none_match: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// Build the context from an incoming request. Fails when the query
    /// string does not parse.
    pub fn from_request<B>(req: &'a Request<B>) -> Result<Self, HandlerError> {
        Ok(Self {
            path: req.uri().path(),
            query: query::parse(req.uri().query().unwrap_or(""))?,
            if_none_match: req
                .headers()
                .get("if-none-match")
                .and_then(|v| v.to_str().ok()),
        })
    }

    /// Value of the `refresh` query parameter, if supplied.
    pub fn refresh(&self) -> Option<&str> {
        self.query.get("refresh").map(String::as_str)
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<ResponseBody>, Infallible> {
    let response = match respond(&req, &state).await {
        Ok(response) => response,
        Err(err) => {
            logger::log_error(&format!(
                "{} {}: {}: {err}",
                req.method(),
                req.uri(),
                err.kind()
            ));
            http::build_500_response(&err)
        }
    };

    logger::log_access(&access_entry(&req, &response, peer_addr));
    Ok(response)
}

/// Dispatch one request on the route table.
async fn respond<B>(
    req: &Request<B>,
    state: &AppState,
) -> Result<Response<ResponseBody>, HandlerError> {
    let ctx = RequestContext::from_request(req)?;

    match routing::dispatch(ctx.path, &state.routes) {
        Some((RouteTarget::Index, _)) => index::render_index(&state.settings).await,
        Some((RouteTarget::Image, captures)) => {
            image::render_image(&ctx, &captures, &state.settings).await
        }
        None => Ok(http::build_404_response(ctx.path)?),
    }
}

/// Assemble the access log entry for a finished request.
fn access_entry<B>(
    req: &Request<B>,
    response: &Response<ResponseBody>,
    peer_addr: SocketAddr,
) -> AccessLogEntry {
    AccessLogEntry {
        remote_addr: peer_addr.ip().to_string(),
        time: Local::now(),
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(ToString::to_string),
        http_version: version_token(req.version()).to_string(),
        status: response.status().as_u16(),
        body_bytes: response.body().size_hint().exact(),
        referer: header_string(req, "referer"),
        user_agent: header_string(req, "user-agent"),
    }
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_token(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_09 {
        "0.9"
    } else if version == Version::HTTP_3 {
        "3"
    } else {
        "1.1"
    }
}
