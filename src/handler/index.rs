//! Directory listing handler
//!
//! Builds the index page: every file in the graph directory carrying the
//! source suffix, each linked to its svg and png renditions.

use std::path::Path;

use hyper::Response;

use crate::config::Settings;
use crate::error::HandlerError;
use crate::http::{self, ResponseBody};
use crate::markup::{serialize, Element};

/// Handle `/`: list renderable sources in the graph directory.
pub async fn render_index(settings: &Settings) -> Result<Response<ResponseBody>, HandlerError> {
    let files = list_graph_sources(&settings.graph_dir, &settings.source_suffix).await?;
    let document = index_page(&files, &settings.source_suffix);
    let html = format!("<!DOCTYPE html>\n{}", serialize(&document.into()));
    Ok(http::build_html_response(html)?)
}

/// Collect file names under `dir` ending in `suffix`, in directory order.
async fn list_graph_sources(dir: &Path, suffix: &str) -> Result<Vec<String>, HandlerError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| HandlerError::io_at(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| HandlerError::io_at(dir, e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(suffix) {
            files.push(name);
        }
    }
    Ok(files)
}

fn index_page(files: &[String], suffix: &str) -> Element {
    let mut listing = Element::new("ul");
    for name in files {
        listing = listing.child(file_entry(name));
    }

    Element::new("html")
        .child(
            Element::new("head")
                .child(Element::new("title").text("Graphviz IDE"))
                .child(Element::new("style").text("a:visited {color: blue}")),
        )
        .child(
            Element::new("body")
                .child(Element::new("h1").text("Graphviz IDE"))
                .child(Element::new("p").text(&format!(
                    "Files in current directory with {suffix} extension:"
                )))
                .child(listing)
                .child(Element::new("p").text(
                    "URL hacking functionality: add ?refresh=X to the URL to refresh the \
                     response every X seconds",
                )),
        )
}

/// One listing row: both format links followed by the file name.
fn file_entry(name: &str) -> Element {
    Element::new("li").child(
        Element::new("span")
            .text("(")
            .child(
                Element::new("a")
                    .attr("href", &format!("/svg/{name}"))
                    .text("svg"),
            )
            .text("/")
            .child(
                Element::new("a")
                    .attr("href", &format!("/png/{name}"))
                    .text("png"),
            )
            .text(")")
            .text(name),
    )
}
