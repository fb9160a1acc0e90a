use crate::{
    data::{Request, Response},
    error::Error,
    util,
};
use hyper::{body, Body};
use std::io::{Read, Write};

/// Drains `source` completely and returns two independent, byte-identical
/// copies. The source is consumed; a caller that still needs the stream must
/// use one of the returned buffers in its place.
///
/// A read failure is surfaced immediately and both buffers are discarded.
pub fn clone_body<R: Read>(mut source: R) -> Result<(Vec<u8>, Vec<u8>), Error> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;

    let mut first = Vec::with_capacity(bytes.len());
    let mut second = Vec::with_capacity(bytes.len());
    first.write_all(&bytes)?;
    second.write_all(&bytes)?;

    Ok((first, second))
}

/// Snapshots an in-flight request for documentation. The body is drained
/// once, duplicated, and one copy is reinstalled so the code under test
/// still sees the full stream.
pub async fn capture_request(request: &mut hyper::Request<Body>) -> Result<Request, Error> {
    let method = request.method().clone();
    let url = request.uri().to_string();
    let headers = util::extract_headers(request.headers());

    let bytes = body::to_bytes(request.body_mut())
        .await
        .map_err(|_| Error::InvalidBody)?;
    let (replay, snapshot) = clone_body(bytes.as_ref())?;
    *request.body_mut() = Body::from(replay);

    tracing::debug!(method = %method, url = %url, bytes = snapshot.len(), "captured request");

    Ok(Request::new(
        method,
        url,
        headers,
        String::from_utf8_lossy(&snapshot).into_owned(),
    ))
}

/// Response-side counterpart of [`capture_request`].
pub async fn capture_response(response: &mut hyper::Response<Body>) -> Result<Response, Error> {
    let status_code = response.status().as_u16();
    let headers = util::extract_headers(response.headers());

    let bytes = body::to_bytes(response.body_mut())
        .await
        .map_err(|_| Error::InvalidBody)?;
    let (replay, snapshot) = clone_body(bytes.as_ref())?;
    *response.body_mut() = Body::from(replay);

    Ok(Response::new(
        status_code,
        headers,
        String::from_utf8_lossy(&snapshot).into_owned(),
    ))
}
