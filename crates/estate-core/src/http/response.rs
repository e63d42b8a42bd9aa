//! Inbound response description.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Status line and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status code.
    pub status: u16,
    /// Reason phrase for the status, e.g. `Not Found`.
    pub status_text: String,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a new response.
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(200, "OK", body)
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fails with an upstream HTTP error unless the status is 2xx.
    ///
    /// `what` names the fetched resource in the error message,
    /// e.g. `geocoding data`.
    pub fn error_for_status(self, what: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::upstream_http(what, self.status, &self.status_text))
        }
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body into `T`.
    ///
    /// Any mismatch between the body and `T` is reported as a schema
    /// validation error; nothing is coerced.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::ErrorKind;

    #[derive(Debug, Deserialize)]
    struct Point {
        lat: f64,
        lng: f64,
    }

    #[test]
    fn test_is_success() {
        assert!(HttpResponse::ok("").is_success());
        assert!(HttpResponse::new(204, "No Content", "").is_success());
        assert!(!HttpResponse::new(404, "Not Found", "").is_success());
        assert!(!HttpResponse::new(301, "Moved Permanently", "").is_success());
    }

    #[test]
    fn test_error_for_status() {
        let error = HttpResponse::new(401, "Unauthorized", "")
            .error_for_status("real estate data")
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UpstreamHttp);
        assert!(error.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_json_is_strict() {
        let point: Point = HttpResponse::ok(r#"{"lat":35.6,"lng":139.7,"extra":1}"#)
            .json()
            .unwrap();
        assert_eq!(point.lat, 35.6);
        assert_eq!(point.lng, 139.7);

        let error = HttpResponse::ok(r#"{"lat":"35.6","lng":139.7}"#)
            .json::<Point>()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::SchemaValidation);

        let error = HttpResponse::ok(r#"{"lat":35.6}"#)
            .json::<Point>()
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::SchemaValidation);
        assert!(error.to_string().contains("lng"));
    }

    #[test]
    fn test_text_is_lossy() {
        let response = HttpResponse::ok(vec![b'o', b'k', 0xff]);
        assert!(response.text().starts_with("ok"));
    }
}
