//! Cross-origin isolation headers.
//!
//! Browsers only expose `SharedArrayBuffer` (and the WebAssembly threading and
//! debugging features built on it) to cross-origin isolated documents. These
//! three headers are attached to every response the server produces.

use axum::http::{header, HeaderName, HeaderValue};
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");
pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");

/// Header name/value pairs injected into every response.
pub const ISOLATION_HEADERS: [(HeaderName, HeaderValue); 3] = [
    (
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("localhost"),
    ),
    (CROSS_ORIGIN_OPENER_POLICY, HeaderValue::from_static("same-origin")),
    (
        CROSS_ORIGIN_EMBEDDER_POLICY,
        HeaderValue::from_static("require-corp"),
    ),
];

/// Stack of the three header layers.
pub type IsolationHeadersLayer = Stack<
    SetResponseHeaderLayer<HeaderValue>,
    Stack<
        SetResponseHeaderLayer<HeaderValue>,
        Stack<SetResponseHeaderLayer<HeaderValue>, Identity>,
    >,
>;

/// Build the layer that stamps [`ISOLATION_HEADERS`] onto every response,
/// replacing any value set further in.
pub fn isolation_headers() -> IsolationHeadersLayer {
    let [allow_origin, opener, embedder] = ISOLATION_HEADERS;
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(allow_origin.0, allow_origin.1))
        .layer(SetResponseHeaderLayer::overriding(opener.0, opener.1))
        .layer(SetResponseHeaderLayer::overriding(embedder.0, embedder.1))
        .into_inner()
}
