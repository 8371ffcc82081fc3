use serde::Deserialize;

/// Envelope the Gateway wraps around every JSON payload.
///
/// On success `ok` is `true` and `result` holds the method-specific payload;
/// on an API-level failure `ok` is `false` and `error` describes it. The
/// client never inspects this envelope itself — HTTP 4xx/5xx responses are
/// returned as ordinary [`Response`](crate::Response) values and the caller
/// decides what an error looks like after decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

/// API-level error reported inside the Gateway's JSON envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub name: String,
}
