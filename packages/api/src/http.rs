//! reqwest-backed implementation of [`UserApi`].

use records::{TransportError, UserApi, UserFields, UserRecord};
use serde::Serialize;

use crate::config::ApiConfig;

/// HTTP client for the remote user service. Cheap to clone; reqwest pools
/// connections internally.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

/// Request body for create and update. The password is omitted entirely when
/// blank, so a PUT with an untouched password field leaves the stored one
/// unchanged.
#[derive(Debug, Serialize)]
struct UserPayload<'a> {
    username: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    password: &'a str,
}

impl<'a> UserPayload<'a> {
    fn from_fields(fields: &'a UserFields) -> Self {
        Self {
            username: &fields.username,
            email: &fields.email,
            password: &fields.password,
        }
    }
}

fn network_error(err: reqwest::Error) -> TransportError {
    tracing::error!("request failed: {err}");
    TransportError::Network(err.to_string())
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    /// Map a response to its body, turning non-success statuses into
    /// [`TransportError::Http`].
    async fn checked(resp: reqwest::Response) -> Result<reqwest::Response, TransportError> {
        let status = resp.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), url = %resp.url(), "server rejected request");
            return Err(TransportError::Http {
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }
}

impl UserApi for HttpApi {
    async fn list(&self) -> Result<Vec<UserRecord>, TransportError> {
        tracing::debug!("GET {}", self.users_url());
        let resp = self
            .client
            .get(self.users_url())
            .send()
            .await
            .map_err(network_error)?;
        Self::checked(resp).await?.json().await.map_err(network_error)
    }

    async fn get(&self, id: u64) -> Result<UserRecord, TransportError> {
        let resp = self
            .client
            .get(self.user_url(id))
            .send()
            .await
            .map_err(network_error)?;
        Self::checked(resp).await?.json().await.map_err(network_error)
    }

    async fn create(&self, fields: &UserFields) -> Result<UserRecord, TransportError> {
        tracing::debug!("POST {}", self.users_url());
        let resp = self
            .client
            .post(self.users_url())
            .json(&UserPayload::from_fields(fields))
            .send()
            .await
            .map_err(network_error)?;
        Self::checked(resp).await?.json().await.map_err(network_error)
    }

    async fn update(&self, id: u64, fields: &UserFields) -> Result<UserRecord, TransportError> {
        tracing::debug!("PUT {}", self.user_url(id));
        let resp = self
            .client
            .put(self.user_url(id))
            .json(&UserPayload::from_fields(fields))
            .send()
            .await
            .map_err(network_error)?;
        Self::checked(resp).await?.json().await.map_err(network_error)
    }

    async fn remove(&self, id: u64) -> Result<(), TransportError> {
        tracing::debug!("DELETE {}", self.user_url(id));
        let resp = self
            .client
            .delete(self.user_url(id))
            .send()
            .await
            .map_err(network_error)?;
        Self::checked(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_construction() {
        // Trailing slash on the base URL is tolerated
        let api = HttpApi::new(ApiConfig::new("http://localhost:8080/api/"));
        assert_eq!(api.users_url(), "http://localhost:8080/api/users");
        assert_eq!(api.user_url(7), "http://localhost:8080/api/users/7");
    }

    #[test]
    fn test_payload_includes_password_when_set() {
        let fields = UserFields {
            username: "carol".to_string(),
            email: "c@d.com".to_string(),
            password: "secret".to_string(),
        };
        let value = serde_json::to_value(UserPayload::from_fields(&fields)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "carol",
                "email": "c@d.com",
                "password": "secret",
            })
        );
    }

    #[test]
    fn test_payload_omits_blank_password() {
        let fields = UserFields {
            username: "carol".to_string(),
            email: "c@d.com".to_string(),
            password: String::new(),
        };
        let value = serde_json::to_value(UserPayload::from_fields(&fields)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "username": "carol",
                "email": "c@d.com",
            })
        );
    }
}
