use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

/// Headers attached to every response. The voice demo records audio in the
/// page itself, so the microphone is allowed for our own origin only.
pub fn security_headers(include_hsts: bool) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = vec![
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (
            PERMISSIONS_POLICY,
            HeaderValue::from_static("camera=(), microphone=(self), geolocation=()"),
        ),
    ];
    if include_hsts {
        headers.push((
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ));
    }
    headers
}

pub fn with_security_headers<S>(router: Router<S>, include_hsts: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers(include_hsts)
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsts_only_when_requested() {
        let without = security_headers(false);
        assert!(without.iter().all(|(name, _)| *name != header::STRICT_TRANSPORT_SECURITY));
        let with = security_headers(true);
        assert_eq!(with.len(), without.len() + 1);
    }

    #[test]
    fn permissions_policy_blocks_camera_and_location() {
        let headers = security_headers(false);
        let (_, value) = headers
            .iter()
            .find(|(name, _)| *name == PERMISSIONS_POLICY)
            .unwrap();
        assert_eq!(value, "camera=(), microphone=(self), geolocation=()");
    }
}
