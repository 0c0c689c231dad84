use http::StatusCode;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{PlagtrackerError, PlagtrackerResult};

/// Response returned by every Plagtracker API call.
///
/// The service wraps all payloads in a `{"message": ..., "data": ...}`
/// envelope. The HTTP status of the call is kept alongside so callers can
/// decide what to do with unsuccessful answers.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    status: StatusCode,
    message: String,
    data: Option<T>,
}

impl<T> Response<T> {
    pub const OK: StatusCode = StatusCode::OK;
    pub const UNAUTHORIZED: StatusCode = StatusCode::UNAUTHORIZED;
    pub const FORBIDDEN: StatusCode = StatusCode::FORBIDDEN;
    pub const NOT_FOUND: StatusCode = StatusCode::NOT_FOUND;
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode::SERVICE_UNAVAILABLE;

    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    /// HTTP status of the call.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent by the API. Usually `"OK"`, or a description of the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Payload of the response, if the API sent one.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Returns `true` when the API answered with `200 OK`.
    pub fn is_successful(&self) -> bool {
        self.status == Self::OK
    }

    /// Returns `true` when the API answered with `503 Service Unavailable`.
    ///
    /// The request may succeed if it is sent again later.
    pub fn is_temporary_error(&self) -> bool {
        self.status == Self::SERVICE_UNAVAILABLE
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Decodes a raw response body into a typed response.
    ///
    /// # Errors
    ///
    /// - `SerializationError` if the body is not valid JSON, or if a
    ///   successful response carries `data` of the wrong shape.
    /// - `WrongResponse` if the body is valid JSON but not an object.
    /// - `MissingField` if the envelope has no `message`.
    ///
    /// On unsuccessful responses an undecodable `data` is dropped, so the
    /// status and message still reach the caller.
    pub fn from_envelope(status: StatusCode, body: &str) -> PlagtrackerResult<Self> {
        let mut envelope = match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => map,
            other => {
                return Err(PlagtrackerError::WrongResponse(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let message = match envelope.remove("message") {
            Some(Value::String(message)) => message,
            Some(Value::Null) | None => return Err(PlagtrackerError::MissingField("message")),
            Some(other) => other.to_string(),
        };

        let data = match envelope.remove("data") {
            Some(Value::Null) | None => None,
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(data) => Some(data),
                Err(e) if status == StatusCode::OK => return Err(e.into()),
                Err(e) => {
                    debug!("Ignoring undecodable data in {} response: {}", status, e);
                    None
                }
            },
        };

        Ok(Self::new(status, message, data))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
