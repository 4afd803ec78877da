use crate::error::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use url::Url;

/// Login credential, serialized as the request body of `POST /auth/login`.
/// e.g. `{"username": "admin", "password": "admin123"}`
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new<S1, S2>(username: S1, password: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Decoded body of `POST /auth/login`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LoginResponse {
    /// The body has a `token` key. Its value is never inspected.
    Authenticated { locations: Vec<String> },

    /// The body is a JSON object without `token`.
    Rejected,
}

#[derive(Debug, Deserialize)]
struct UserPart {
    #[serde(default)]
    locations: Option<Vec<String>>,
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl LoginResponse {
    /// Classify a raw response body.
    ///
    /// Returns `Error::Json` if the body is not JSON at all, and
    /// `Error::UnexpectedShape` if it is JSON but cannot be read as a login response.
    /// A top-level array or scalar is `UnexpectedShape`, never `Rejected`: only an object
    /// can lack a `token` key.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let mut obj = match value {
            Value::Object(obj) => obj,
            other => {
                return Err(Error::UnexpectedShape(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        if !obj.contains_key("token") {
            return Ok(LoginResponse::Rejected);
        }

        let user: Option<UserPart> = match obj.remove("user") {
            Some(v) => {
                serde_json::from_value(v).map_err(|e| Error::UnexpectedShape(e.to_string()))?
            }
            None => None,
        };
        let locations = user.and_then(|u| u.locations).unwrap_or_default();
        Ok(LoginResponse::Authenticated { locations })
    }
}

#[async_trait]
pub trait AuthService: Send + Sync {
    fn base_url(&self) -> &Url;

    /// Send the credential to the login endpoint and return the raw response body.
    /// The response status is not checked.
    async fn login(&self, cred: &Credential) -> Result<String>;

    async fn health(&self) -> Result<HealthStatus>;
}
