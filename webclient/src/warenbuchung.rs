use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{error::*, model::*, util};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5232/api";
pub const LOGIN_PATH: &str = "auth/login";
pub const HEALTH_PATH: &str = "health";

pub struct WarenbuchungClient {
    http: reqwest::Client,
    base_url: Url,
    login_url: Url,
    health_url: Url,
}

impl WarenbuchungClient {
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            login_url: util::join_path(&base_url, LOGIN_PATH)?,
            health_url: util::join_path(&base_url, HEALTH_PATH)?,
            base_url,
        })
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    pub fn health_url(&self) -> &Url {
        &self.health_url
    }
}

#[async_trait]
impl AuthService for WarenbuchungClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn login(&self, cred: &Credential) -> Result<String> {
        log::debug!("POST {} (username={})", self.login_url, cred.username);
        let resp = self
            .http
            .post(self.login_url.clone())
            .json(cred)
            .send()
            .await?;
        log::debug!("{} responded {}", self.login_url, resp.status());
        Ok(resp.text().await?)
    }

    async fn health(&self) -> Result<HealthStatus> {
        log::debug!("GET {}", self.health_url);
        let resp = self.http.get(self.health_url.clone()).send().await?;

        let got = resp.status();
        let expected = StatusCode::OK;
        if got != expected {
            return Err(Error::UnexpectedResponseCode {
                got,
                expected,
                requested_url: self.health_url.to_string(),
            });
        }
        Ok(resp.json().await?)
    }
}
