//! Accept header middleware
//!
//! Picks the response representation from the Accept header and rejects
//! requests that rule out every representation the API can produce.

use std::cmp::Ordering;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use super::Representation;
use crate::error::AppError;

/// Collect the Accept header values, if any were sent
fn accept_values(headers: &HeaderMap) -> Vec<&str> {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .collect()
}

/// Split a media range into its lowercased type and its quality
fn parse_range(range: &str) -> (String, f32) {
    let mut parts = range.split(';');
    let media = parts.next().unwrap_or_default().trim().to_ascii_lowercase();

    let quality = parts
        .find_map(|param| {
            param
                .trim()
                .strip_prefix("q=")
                .and_then(|q| q.trim().parse::<f32>().ok())
        })
        .unwrap_or(1.0);

    (media, quality)
}

fn representation_for(media: &str) -> Option<Representation> {
    match media {
        "*/*" | "application/*" | "application/json" => Some(Representation::Json),
        "application/xml" | "text/xml" => Some(Representation::Xml),
        m if m.starts_with("application/") && m.ends_with("+json") => Some(Representation::Json),
        _ => None,
    }
}

/// Choose a representation for the given Accept values
///
/// Ranges are tried by descending quality, ties in header order. No Accept
/// header, or only blank ones, means JSON.
pub(crate) fn negotiate(values: &[&str]) -> Option<Representation> {
    let mut ranges: Vec<(String, f32)> = values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(parse_range)
        .collect();

    if ranges.is_empty() {
        return Some(Representation::Json);
    }

    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranges
        .iter()
        .filter(|(_, quality)| *quality > 0.0)
        .find_map(|(media, _)| representation_for(media))
}

/// Negotiation middleware
///
/// Stores the chosen [`Representation`] in the request extensions, or
/// responds 406 when neither JSON nor XML is acceptable.
pub async fn negotiate_representation(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let values = accept_values(request.headers());

    let Some(representation) = negotiate(&values) else {
        tracing::debug!(accept = ?values, "Refusing request without an acceptable media type");
        return Err(AppError::NotAcceptable(format!(
            "Only application/json and application/xml are available, requested: {}",
            values.join(", ")
        )));
    };

    request.extensions_mut().insert(representation);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    use super::*;

    fn guarded() -> Router {
        Router::new()
            .route(
                "/",
                get(|representation: Representation| async move { format!("{:?}", representation) }),
            )
            .layer(middleware::from_fn(negotiate_representation))
    }

    fn request_accepting(accept: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(accept) = accept {
            builder = builder.header(header::ACCEPT, accept);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn missing_or_blank_accept_is_json() {
        assert_eq!(negotiate(&[]), Some(Representation::Json));
        assert_eq!(negotiate(&[""]), Some(Representation::Json));
    }

    #[test]
    fn json_ranges() {
        for accept in [
            "application/json",
            "*/*",
            "application/*",
            "application/problem+json",
            "Application/JSON; charset=utf-8",
        ] {
            assert_eq!(negotiate(&[accept]), Some(Representation::Json), "{accept}");
        }
    }

    #[test]
    fn xml_ranges() {
        assert_eq!(negotiate(&["application/xml"]), Some(Representation::Xml));
        assert_eq!(negotiate(&["text/xml"]), Some(Representation::Xml));
        assert_eq!(
            negotiate(&["text/html, application/xml;q=0.9, */*;q=0.8"]),
            Some(Representation::Xml)
        );
    }

    #[test]
    fn quality_orders_the_choice() {
        assert_eq!(
            negotiate(&["application/xml;q=0.5, application/json"]),
            Some(Representation::Json)
        );
        assert_eq!(
            negotiate(&["application/json;q=0.2", "application/xml;q=0.8"]),
            Some(Representation::Xml)
        );
        assert_eq!(
            negotiate(&["application/xml, application/json"]),
            Some(Representation::Xml)
        );
    }

    #[test]
    fn unsupported_ranges_are_refused() {
        assert_eq!(negotiate(&["application/yaml"]), None);
        assert_eq!(negotiate(&["text/html, text/plain"]), None);
        assert_eq!(negotiate(&["text/*"]), None);
    }

    #[test]
    fn zero_quality_refuses_a_range() {
        assert_eq!(negotiate(&["application/json;q=0"]), None);
        assert_eq!(negotiate(&["application/yaml, */*; q=0.0"]), None);
        assert_eq!(
            negotiate(&["application/json;q=0.1"]),
            Some(Representation::Json)
        );
    }

    #[tokio::test]
    async fn middleware_short_circuits_with_406() {
        let response = guarded()
            .oneshot(request_accepting(Some("application/yaml")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }

    #[tokio::test]
    async fn middleware_hands_choice_to_handler() {
        for (accept, expected) in [
            (None, "Json"),
            (Some("application/json"), "Json"),
            (Some("application/xml"), "Xml"),
        ] {
            let response = guarded()
                .oneshot(request_accepting(accept))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(body.as_ref(), expected.as_bytes());
        }
    }
}
