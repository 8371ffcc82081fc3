use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::pin::Pin;

use crate::error::Error;

pub type BoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + 'static>>;

/// HTTP response with flexible consumption patterns
///
/// The status code is reported but never interpreted: a 4xx/5xx response is
/// a normal `Response`, and API-level failures surface through the decoded
/// JSON envelope. The body is drained only when the caller consumes it;
/// dropping an unconsumed `Response` releases the underlying connection.
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}

enum ResponseBody {
    Buffered(Bytes),
    Streaming(BoxStream<Result<Bytes, Error>>),
}

impl std::fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseBody::Buffered(bytes) => f
                .debug_tuple("ResponseBody::Buffered")
                .field(&bytes.len())
                .finish(),
            ResponseBody::Streaming(_) => write!(f, "ResponseBody::Streaming(..)"),
        }
    }
}

impl Response {
    /// Create a new response from components
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        stream: BoxStream<Result<Bytes, Error>>,
    ) -> Self {
        Self {
            status,
            headers,
            body: ResponseBody::Streaming(stream),
        }
    }

    /// Create a response from buffered bytes
    pub fn from_bytes(status: StatusCode, headers: HeaderMap, bytes: Bytes) -> Self {
        Self {
            status,
            headers,
            body: ResponseBody::Buffered(bytes),
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Consume the response and return the entire body as bytes
    ///
    /// Fails with [`Error::Read`] if the connection drops mid-body.
    pub async fn bytes(self) -> Result<Bytes, Error> {
        match self.body {
            ResponseBody::Buffered(bytes) => Ok(bytes),
            ResponseBody::Streaming(mut stream) => {
                let mut buf = Vec::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(Bytes::from(buf))
            }
        }
    }

    /// Consume the response and deserialize the body as JSON
    ///
    /// The destination shape is the type parameter; a payload that does not
    /// match it fails with [`Error::Decode`].
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let bytes = self.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    /// Consume the response and return the body as a string
    pub async fn text(self) -> Result<String, Error> {
        let bytes = self.bytes().await?;
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::Decode(format!("invalid UTF-8: {}", e)))
    }

    /// Convert the response into a byte stream for streaming consumption
    pub fn into_stream(self) -> BoxStream<Result<Bytes, Error>> {
        match self.body {
            ResponseBody::Buffered(bytes) => {
                Box::pin(futures::stream::once(async move { Ok(bytes) }))
            }
            ResponseBody::Streaming(stream) => stream,
        }
    }
}
