use crate::tc_error::TcError;
use crate::teamcity::teamcity_async_client::TeamCityAsyncClient;
use base64::Engine;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::trace;

const BASIC_AUTH_PREFIX: &str = "httpAuth";
const GUEST_AUTH_PREFIX: &str = "guestAuth";

/// Asynchronous TeamCity REST client.
pub struct TeamCityHttpClient {
    /// `<server>/<auth prefix>/app/rest`
    rest_root: String,
    credentials: Option<(String, String)>,
    client: Client,
}

impl TeamCityHttpClient {
    /// Creates a new asynchronous TeamCity client authentic by Password.
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the TeamCity server.
    /// * `username` - Username for authentication.
    /// * `pwd` - Password for authentication.
    /// * `timeout` - Optional whole-request timeout.
    pub fn new(
        url: &str,
        username: &str,
        pwd: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, TcError> {
        Ok(Self {
            rest_root: rest_root(url, BASIC_AUTH_PREFIX)?,
            credentials: Some((username.into(), pwd.into())),
            client: build_client(timeout)?,
        })
    }

    /// Creates a new asynchronous TeamCity client using guest access.
    pub fn new_guest(url: &str, timeout: Option<Duration>) -> Result<Self, TcError> {
        Ok(Self {
            rest_root: rest_root(url, GUEST_AUTH_PREFIX)?,
            credentials: None,
            client: build_client(timeout)?,
        })
    }

    pub fn rest_root(&self) -> &str {
        &self.rest_root
    }

    pub fn is_guest(&self) -> bool {
        self.credentials.is_none()
    }
}

fn rest_root(url: &str, auth_prefix: &str) -> Result<String, TcError> {
    url::Url::parse(url)?;
    Ok(format!(
        "{}/{}/app/rest",
        url.trim_end_matches('/'),
        auth_prefix
    ))
}

fn build_client(timeout: Option<Duration>) -> Result<Client, TcError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[async_trait::async_trait]
impl TeamCityAsyncClient for TeamCityHttpClient {
    /// Sends an asynchronous HTTP request to the TeamCity server.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<String, TcError> {
        let url = format!("{}/{}", self.rest_root, endpoint);
        trace!(%method, url = %url, ?query, "teamcity request");

        let mut req = self
            .client
            .request(method, &url)
            .header(ACCEPT, "application/json");

        if let Some((username, pwd)) = &self.credentials {
            let auth = format!(
                "Basic {}",
                base64::prelude::BASE64_STANDARD.encode(format!("{}:{}", username, pwd).as_bytes())
            );
            req = req.header(AUTHORIZATION, auth);
        }

        if let Some(q) = query {
            req = req.query(q);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(TcError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(body)
    }
}
