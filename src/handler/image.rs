//! Image rendering handler
//!
//! Turns `/svg/{file}` and `/png/{file}` requests into renderer output,
//! short-circuiting to 304 when the client already holds the current
//! revision of the source.

use hyper::Response;

use crate::config::Settings;
use crate::error::HandlerError;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, ResponseBody};
use crate::render::{self, OutputFormat};

/// Handle an image route. `captures` carries the format token and file
/// name bound by the route pattern, in that order.
pub async fn render_image(
    ctx: &RequestContext<'_>,
    captures: &[&str],
    settings: &Settings,
) -> Result<Response<ResponseBody>, HandlerError> {
    let &[format_token, file] = captures else {
        return Err(HandlerError::Internal(format!(
            "image route produced {} captures instead of 2",
            captures.len()
        )));
    };
    let format = OutputFormat::from_token(format_token).ok_or_else(|| {
        HandlerError::Internal(format!(
            "image route captured unknown format `{format_token}`"
        ))
    })?;

    let source = settings.graph_dir.join(file);

    // Freshness comes first: a missing source surfaces here as an IO
    // failure rather than a 404.
    let etag = cache::compute_etag(&source)
        .await
        .map_err(|e| HandlerError::io_at(&source, e))?;

    if cache::etag_matches(&etag, ctx.if_none_match) {
        return Ok(http::build_not_modified_response(&etag, ctx.refresh())?);
    }

    let data = render::render(&settings.renderer, &source, format).await?;
    Ok(http::build_image_response(
        data,
        format.content_type(),
        &etag,
        ctx.refresh(),
    )?)
}
