// Process-wide middleware: panic catcher, tracing, security headers, CORS,
// rate limiting, compression, and the request body cap

use std::any::Any;
use std::sync::OnceLock;

use axum::{
    extract::{DefaultBodyLimit, OriginalUri, Request},
    http::{header, request::Parts, HeaderName, HeaderValue, Method, StatusCode},
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    Router,
};
use regex::Regex;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::ApiError;

pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// One request replenished every 9 seconds with a burst of 100,
/// roughly 100 requests per 15 minutes per client address
const RATE_LIMIT_REPLENISH_SECS: u64 = 9;
const RATE_LIMIT_BURST: u32 = 100;

const HSTS: &str = "max-age=15552000; includeSubDomains";

fn static_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}

fn private_origin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^http://(localhost|127\.0\.0\.1|10\.\d{1,3}\.\d{1,3}\.\d{1,3}|192\.168\.\d{1,3}\.\d{1,3}|172\.(1[6-9]|2\d|3[01])\.\d{1,3}\.\d{1,3})(:\d+)?$",
        )
        .expect("private origin pattern is valid")
    })
}

/// Whether a browser origin may call the API
///
/// Exact matches against the configured list, plus any plain-http origin on
/// localhost or a private IPv4 network (LAN testing from phones).
pub fn origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|o| o == origin) || private_origin_pattern().is_match(origin)
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| origin_allowed(origin, &allowed))
                    .unwrap_or(false)
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::InternalError(format!("handler panicked: {}", detail)).into_response()
}

/// Replace axum's empty 405 with an error envelope, keeping the Allow header
async fn method_not_allowed_envelope(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut envelope = ApiError::MethodNotAllowed { method, path }.into_response();
    if let Some(allow) = allow {
        envelope.headers_mut().insert(header::ALLOW, allow);
    }
    envelope
}

/// Fallback for requests no route matched
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// Wrap the router with the process-wide layer stack
///
/// Outermost first: panic catcher, tracing, security headers, CORS,
/// 405 envelope, rate limiter (optional), compression, body limit.
pub fn apply<S>(router: Router<S>, config: &AppConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let router = router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new());

    let router = if config.rate_limit_enabled {
        let governor = GovernorConfigBuilder::default()
            .per_second(RATE_LIMIT_REPLENISH_SECS)
            .burst_size(RATE_LIMIT_BURST)
            .finish();

        match governor {
            Some(governor) => router.layer(GovernorLayer {
                config: Box::leak(Box::new(governor)),
            }),
            None => {
                tracing::warn!("Rate limiter configuration rejected, continuing without it");
                router
            }
        }
    } else {
        tracing::info!("Rate limiting disabled");
        router
    };

    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TraceLayer::new_for_http())
            .layer(static_header(header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
            .layer(static_header(header::X_FRAME_OPTIONS, "SAMEORIGIN"))
            .layer(static_header(header::REFERRER_POLICY, "no-referrer"))
            .layer(static_header(header::X_DNS_PREFETCH_CONTROL, "off"))
            .layer(static_header(header::STRICT_TRANSPORT_SECURITY, HSTS))
            .layer(static_header(
                HeaderName::from_static("cross-origin-opener-policy"),
                "same-origin",
            ))
            .layer(cors_layer(&config.allowed_origins))
            .layer(from_fn(method_not_allowed_envelope)),
    )
}
