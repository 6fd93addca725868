//! Response representations
//!
//! JSON by default, XML when the client asks for it.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    Json,
};
use quick_xml::de::DeError;
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::error::{AppError, DomainError};

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Wire format chosen for a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    #[default]
    Json,
    Xml,
}

/// Reads the choice made by the negotiation middleware, JSON when absent
#[async_trait]
impl<S> FromRequestParts<S> for Representation
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Representation>()
            .copied()
            .unwrap_or_default())
    }
}

enum Payload<T> {
    One(T),
    Many { item: &'static str, items: Vec<T> },
}

/// Wraps a list so each entry becomes an `<item>` element under the root
struct XmlItems<'a, T> {
    item: &'static str,
    items: &'a [T],
}

impl<T: Serialize> Serialize for XmlItems<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut list = serializer.serialize_struct("XmlItems", 1)?;
        list.serialize_field(self.item, self.items)?;
        list.end()
    }
}

/// A response body rendered in the negotiated representation
pub struct Negotiated<T> {
    representation: Representation,
    root: &'static str,
    payload: Payload<T>,
}

impl<T: Serialize> Negotiated<T> {
    /// Single value, `root` names the XML document element
    pub fn one(representation: Representation, root: &'static str, value: T) -> Self {
        Self {
            representation,
            root,
            payload: Payload::One(value),
        }
    }

    /// JSON array, or `<root><item/>...</root>` in XML
    pub fn many(
        representation: Representation,
        root: &'static str,
        item: &'static str,
        items: Vec<T>,
    ) -> Self {
        Self {
            representation,
            root,
            payload: Payload::Many { item, items },
        }
    }

    fn to_xml(&self) -> Result<String, DeError> {
        match &self.payload {
            Payload::One(value) => quick_xml::se::to_string_with_root(self.root, value),
            Payload::Many { item, items } => quick_xml::se::to_string_with_root(
                self.root,
                &XmlItems {
                    item: *item,
                    items: items.as_slice(),
                },
            ),
        }
    }
}

impl<T: Serialize> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        match self.representation {
            Representation::Json => match self.payload {
                Payload::One(value) => Json(value).into_response(),
                Payload::Many { items, .. } => Json(items).into_response(),
            },
            Representation::Xml => match self.to_xml() {
                Ok(xml) => ([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], xml).into_response(),
                Err(e) => AppError::from(DomainError::Internal(format!(
                    "XML serialization failed: {}",
                    e
                )))
                .into_response(),
            },
        }
    }
}
