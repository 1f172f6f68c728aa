//! Response body module
//!
//! Every response streams its body as a finite sequence of byte chunks,
//! polled once by the connection; a body cannot be replayed. Single-chunk
//! and empty bodies keep an exact size hint, so short responses still get
//! a `Content-Length`.

use std::convert::Infallible;

use futures_util::stream;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full, StreamBody};
use hyper::body::{Bytes, Frame};

/// Body type shared by every response the server produces.
pub type ResponseBody = BoxBody<Bytes, Infallible>;

/// Body holding one chunk.
pub fn full(data: impl Into<Bytes>) -> ResponseBody {
    Full::new(data.into()).boxed()
}

/// Body with no content.
pub fn empty() -> ResponseBody {
    Empty::new().boxed()
}

/// Body streaming a fixed sequence of chunks in order.
pub fn chunks<I>(parts: I) -> ResponseBody
where
    I: IntoIterator<Item = Bytes>,
    I::IntoIter: Send + Sync + 'static,
{
    let frames = parts
        .into_iter()
        .map(|part| Ok::<_, Infallible>(Frame::data(part)));
    StreamBody::new(stream::iter(frames)).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body as _;

    #[tokio::test]
    async fn test_chunks_concatenate_in_order() {
        let body = chunks([
            Bytes::from_static(b"404 Not Found"),
            Bytes::from_static(b"\n\n"),
            Bytes::from_static(b"/missing"),
        ]);
        let collected = body.collect().await.unwrap().to_bytes();
        assert_eq!(&collected[..], &b"404 Not Found\n\n/missing"[..]);
    }

    #[test]
    fn test_full_keeps_exact_size_hint() {
        assert_eq!(full("hello").size_hint().exact(), Some(5));
        assert_eq!(empty().size_hint().exact(), Some(0));
    }

    #[tokio::test]
    async fn test_empty_collects_to_nothing() {
        let collected = empty().collect().await.unwrap().to_bytes();
        assert!(collected.is_empty());
    }
}
