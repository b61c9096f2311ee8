use crate::error::MqxError;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, error};

const ERROR_FIELD: &str = "error";

/// The response body shared by every call to the management API.
///
/// It is a JSON object with an optional `error` field and, for reads, the payload
/// stored under an operation specific field (`topics`, `partitions`, ...).
/// An `Envelope` can only be obtained once the `error` field has been checked,
/// so every operation gets the same failure semantics whatever the HTTP status.
#[derive(Debug)]
pub struct Envelope {
    status: StatusCode,
    fields: Map<String, Value>,
}

impl Envelope {
    /// Reads the whole response body and checks it for the broker error.
    pub async fn from_response(response: Response) -> Result<Self, MqxError> {
        let status = response.status();
        let body = response.bytes().await?;
        Self::from_bytes(status, &body)
    }

    /// Parses the body and fails with [`MqxError::Backend`] if the `error` field is set and non-empty.
    ///
    /// An empty body on a successful status is an envelope without error and without payload.
    pub fn from_bytes(status: StatusCode, body: &[u8]) -> Result<Self, MqxError> {
        let mut fields = if body.iter().all(u8::is_ascii_whitespace) {
            if !status.is_success() {
                error!("Received an empty response with status: {status}.");
                return Err(MqxError::InvalidResponse(status));
            }
            Map::new()
        } else {
            match serde_json::from_slice::<Value>(body) {
                Ok(Value::Object(fields)) => fields,
                Ok(_) | Err(_) => {
                    error!("Received a response that is not a JSON object, status: {status}.");
                    return Err(MqxError::InvalidResponse(status));
                }
            }
        };

        match fields.remove(ERROR_FIELD) {
            None | Some(Value::Null) => {}
            Some(Value::String(message)) if message.is_empty() => {}
            Some(Value::String(message)) => {
                debug!("Broker reported an error with status: {status}: {message}");
                return Err(MqxError::Backend(message));
            }
            Some(other) => {
                debug!("Broker reported a non-text error with status: {status}: {other}");
                return Err(MqxError::Backend(other.to_string()));
            }
        }

        Ok(Self { status, fields })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Takes the payload stored under `field`.
    ///
    /// A missing or `null` field yields the empty value, so an empty result is never an error.
    pub fn take<T: DeserializeOwned + Default>(&mut self, field: &str) -> Result<T, MqxError> {
        match self.fields.remove(field) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value).map_err(|error| {
                error!("Cannot deserialize payload field: {field}, error: {error}");
                MqxError::CannotDeserializePayload(field.to_string())
            }),
        }
    }
}
