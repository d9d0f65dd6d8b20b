use const_format::concatcp;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::error::{Result, TeamAction, TeamsError};
use crate::transport::{ApiRequest, ApiResponse, Transport};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "v3";
pub const GITHUB_MEDIA_TYPE: &str = concatcp!("application/vnd.github.", API_VERSION, "+json");
const CLIENT_USER_AGENT: &str = concatcp!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Organization-scoped GitHub REST client over any [`Transport`].
pub struct GitHubClient<T> {
    transport: T,
    base_url: Url,
    org: String,
    token: String,
}

impl<T: Transport> GitHubClient<T> {
    pub fn new(transport: T, token: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            org: org.into(),
            token: token.into(),
        }
    }

    /// Point the client at another API root, e.g. a GitHub Enterprise host.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| TeamsError::BuildRequest(format!("invalid API URL {base_url:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(TeamsError::BuildRequest(format!(
                "API URL {base_url:?} cannot be used as a base"
            )));
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    /// `{base}/orgs/{org}/{segments...}`, each segment percent-encoded.
    pub fn org_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("orgs").push(&self.org).extend(segments);
        }
        url
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse> {
        let mut request = ApiRequest::new(method, url).with_headers(self.headers()?);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        debug!(method = %request.method, url = %request.url, "calling github API");
        let response = self.transport.dispatch(request).await?;
        info!(status = response.status.as_u16(), "return status code of the request");

        Ok(response)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| TeamsError::BuildRequest(format!("invalid API token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        Ok(headers)
    }
}

pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(TeamsError::Encode)
}

pub(crate) fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D> {
    serde_json::from_slice(&response.body).map_err(TeamsError::Decode)
}

/// Fails with `action` unless the response carries exactly `expected`.
pub(crate) fn expect_status(
    response: &ApiResponse,
    expected: StatusCode,
    action: impl FnOnce() -> TeamAction,
) -> Result<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(TeamsError::UnexpectedStatus {
            action: action(),
            status: response.status,
        })
    }
}
