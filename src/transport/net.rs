use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response, StatusCode};
use tracing::{debug, warn};

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::{Result, TeamsError};

/// Redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 15;

/// Transport backed by a real `reqwest` client.
///
/// Redirects are followed here rather than by reqwest so that every hop
/// carries the headers of the original request. reqwest strips
/// `Authorization` when a redirect changes host; this transport does not,
/// which means the bearer token is sent to whatever host a redirect names.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let http = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let ApiRequest {
            mut method,
            mut url,
            headers,
            mut body,
        } = request;
        let mut hops = 0;

        loop {
            debug!(%method, %url, hops, "sending request");

            let mut builder = self
                .http
                .request(method.clone(), url.clone())
                .headers(headers.clone());
            if let Some(bytes) = &body {
                builder = builder.body(bytes.clone());
            }
            let response = builder.send().await?;
            let status = response.status();

            let Some(location) = redirect_location(&response) else {
                let headers = response.headers().clone();
                let body = response.bytes().await.map_err(TeamsError::ReadBody)?;
                return Ok(ApiResponse {
                    status,
                    headers,
                    body: body.to_vec(),
                });
            };

            hops += 1;
            if hops > MAX_REDIRECTS {
                return Err(TeamsError::TooManyRedirects { hops });
            }

            let next = url.join(&location).map_err(|e| {
                TeamsError::BuildRequest(format!("invalid redirect location {location:?}: {e}"))
            })?;
            if next.host_str() != url.host_str() {
                warn!(from = %url, to = %next, "forwarding request headers across hosts");
            }
            if switches_to_get(status, &method) {
                method = Method::GET;
                body = None;
            }
            url = next;
        }
    }
}

fn redirect_location(response: &Response) -> Option<String> {
    let status = response.status();
    let followed = matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    );
    if !followed {
        return None;
    }
    response
        .headers()
        .get(LOCATION)?
        .to_str()
        .ok()
        .map(str::to_owned)
}

// 307 and 308 replay the method and body; the older codes fall back to GET.
fn switches_to_get(status: StatusCode, method: &Method) -> bool {
    let legacy = matches!(
        status,
        StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND | StatusCode::SEE_OTHER
    );
    legacy && *method != Method::GET && *method != Method::HEAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
    use url::Url;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn authorized(method: Method, url: &str) -> ApiRequest {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer secret"));
        ApiRequest::new(method, Url::parse(url).unwrap()).with_headers(headers)
    }

    #[tokio::test]
    async fn test_returns_body_without_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/teams/core"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"core"}"#))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/orgs/acme/teams/core", server.uri());
        let response = transport.dispatch(authorized(Method::GET, &url)).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, br#"{"name":"core"}"#);
    }

    #[tokio::test]
    async fn test_redirect_keeps_authorization_across_hosts() {
        let origin = MockServer::start().await;
        let target = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/start"))
            .respond_with(
                ResponseTemplate::new(307)
                    .insert_header("Location", format!("{}/final", target.uri()).as_str()),
            )
            .mount(&origin)
            .await;
        Mock::given(method("PUT"))
            .and(path("/final"))
            .and(header("Authorization", "Bearer secret"))
            .and(body_string(r#"{"role":"member"}"#))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&target)
            .await;

        let transport = HttpTransport::new().unwrap();
        let request = authorized(Method::PUT, &format!("{}/start", origin.uri()))
            .with_body(br#"{"role":"member"}"#.to_vec());
        let response = transport.dispatch(request).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_see_other_switches_to_get() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orgs/acme/teams"))
            .respond_with(ResponseTemplate::new(303).insert_header("Location", "/result"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/result"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let request = authorized(Method::POST, &format!("{}/orgs/acme/teams", server.uri()))
            .with_body(b"{}".to_vec());
        let response = transport.dispatch(request).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_redirect_loop_is_bounded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/loop"))
            .expect(MAX_REDIRECTS as u64 + 1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/loop", server.uri());
        let err = transport.dispatch(authorized(Method::GET, &url)).await.unwrap_err();

        assert!(matches!(err, TeamsError::TooManyRedirects { hops: 16 }));
        assert_eq!(err.to_string(), "16 consecutive redirects");
    }

    #[tokio::test]
    async fn test_redirect_without_location_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/moved"))
            .respond_with(ResponseTemplate::new(302))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/moved", server.uri());
        let response = transport.dispatch(authorized(Method::GET, &url)).await.unwrap();

        assert_eq!(response.status, StatusCode::FOUND);
    }

    #[test]
    fn test_switches_to_get() {
        assert!(switches_to_get(StatusCode::FOUND, &Method::POST));
        assert!(switches_to_get(StatusCode::SEE_OTHER, &Method::PATCH));
        assert!(!switches_to_get(StatusCode::FOUND, &Method::HEAD));
        assert!(!switches_to_get(StatusCode::TEMPORARY_REDIRECT, &Method::POST));
        assert!(!switches_to_get(StatusCode::PERMANENT_REDIRECT, &Method::DELETE));
    }
}
