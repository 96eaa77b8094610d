//! Plumbing shared by both API clients

use reqwest::{Client, Response};
use tracing::error;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client(api: &'static str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| Error::Transport { api, source })
}

/// Returns the body of a successful response, or [`Error::Http`] carrying the raw body
pub(crate) async fn success_body(api: &'static str, response: Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| Error::Transport { api, source })?;

    if !status.is_success() {
        error!(api, %status, %body, "upstream request failed");
        return Err(Error::Http { api, status, body });
    }

    Ok(body)
}
