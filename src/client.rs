//! The client module for sending requests and parsing responses

use crate::auth::Authenticator;
use crate::error::Error;
use crate::request::builder::{PushBody, PushRequest, PushRequestBuilder};
use crate::response::PushResponse;
use http_body_util::BodyExt;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use std::fmt;
use std::time::Duration;
use tokio::time::timeout;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
const DEFAULT_POOL_IDLE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 100;

const PRODUCTION_URL: &str = "https://openapi.xg.qq.com/v3/push/app";

type HyperConnector = HttpsConnector<HttpConnector>;

/// The push API URL requests are sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// The Xinge v3 push API (openapi.xg.qq.com)
    #[default]
    Production,
    /// Any other URL, e.g. a proxy or a test server
    Custom(String),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = match self {
            Endpoint::Production => PRODUCTION_URL,
            Endpoint::Custom(url) => url.as_str(),
        };

        write!(f, "{}", url)
    }
}

/// Sends push requests to Xinge over a pooled keep-alive connection.
///
/// The `send` method returns a future, which is successful when Xinge
/// answers with a push response. Whether the push was accepted is told by
/// the `ret_code` of the [PushResponse](../response/struct.PushResponse.html).
#[derive(Debug, Clone)]
pub struct Client {
    options: ConnectionOptions,
    http_client: HttpClient<HyperConnector, PushBody>,
}

/// Uses [`Endpoint::Production`] by default.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The timeout of the HTTP requests
    pub request_timeout_secs: Option<u64>,
    /// The timeout for idle sockets being kept alive
    pub pool_idle_timeout_secs: Option<u64>,
    /// Maximum number of idle connections kept per host
    pub pool_max_idle_per_host: usize,
    /// The endpoint where the requests are sent to
    pub endpoint: Endpoint,
    /// See [`crate::auth::Authenticator`]
    pub authenticator: Option<Authenticator>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
            pool_idle_timeout_secs: Some(DEFAULT_POOL_IDLE_TIMEOUT_SECS),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            endpoint: Endpoint::Production,
            authenticator: None,
        }
    }
}

impl ClientOptions {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            ..Default::default()
        }
    }

    /// Authorize every sent request with these credentials.
    pub fn with_authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    pub fn with_pool_idle_timeout(mut self, seconds: u64) -> Self {
        self.pool_idle_timeout_secs = Some(seconds);
        self
    }

    pub fn with_pool_max_idle_per_host(mut self, max_idle: usize) -> Self {
        self.pool_max_idle_per_host = max_idle;
        self
    }
}

#[derive(Debug, Clone)]
struct ConnectionOptions {
    endpoint: Endpoint,
    request_timeout: Duration,
    authenticator: Option<Authenticator>,
}

impl From<ClientOptions> for ConnectionOptions {
    fn from(value: ClientOptions) -> Self {
        let ClientOptions {
            endpoint,
            pool_idle_timeout_secs: _,
            pool_max_idle_per_host: _,
            authenticator,
            request_timeout_secs,
        } = value;
        let request_timeout = Duration::from_secs(request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS));
        Self {
            endpoint,
            request_timeout,
            authenticator,
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

impl Client {
    /// Creates a client with its own connection pool. Does not connect until
    /// the first request is sent.
    pub fn new(options: ClientOptions) -> Client {
        let http_client = HttpClient::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .pool_idle_timeout(options.pool_idle_timeout_secs.map(Duration::from_secs))
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .build(default_connector());

        let options = options.into();

        Client { http_client, options }
    }

    /// A request builder targeting the endpoint of this client.
    pub fn request_builder(&self) -> PushRequestBuilder {
        PushRequestBuilder::new(self.options.endpoint.clone())
    }

    /// Send a push request. If the client has an
    /// [Authenticator](../auth/struct.Authenticator.html), the request is
    /// authorized first.
    #[cfg_attr(feature = "tracing", ::tracing::instrument(skip_all, fields(uri = %request.uri())))]
    pub async fn send(&self, mut request: PushRequest) -> Result<PushResponse, Error> {
        if let Some(ref authenticator) = self.options.authenticator {
            authenticator.authorize(&mut request)?;
        }

        let requesting = self.http_client.request(request);

        let Ok(response_result) = timeout(self.options.request_timeout, requesting).await else {
            return Err(Error::RequestTimeout(self.options.request_timeout.as_secs()));
        };

        let response = response_result?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(status = status.as_u16(), body_len = body.len(), "Received push response");
        }

        serde_json::from_slice(&body).map_err(|_| Error::ResponseError(status.as_u16()))
    }
}

fn default_connector() -> HyperConnector {
    HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::options;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    const PUSH_REPLY: &str = r#"{"seq":7,"push_id":"123","ret_code":0,"environment":"product","result":{"status":"ok"}}"#;

    /// Reads one HTTP/1.1 request and returns its head and body.
    async fn read_request(stream: &mut TcpStream) -> (String, String) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(head_end) = text.find("\r\n\r\n") {
                let head = text[..head_end].to_string();
                let content_length = head
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().unwrap())
                    })
                    .unwrap_or(0);

                if buf.len() >= head_end + 4 + content_length {
                    let body = text[head_end + 4..].to_string();
                    return (head, body);
                }
            }

            if n == 0 {
                panic!("connection closed before the request was complete");
            }
        }
    }

    async fn serve_once(reply_status: &'static str, reply_body: &'static str) -> (String, tokio::task::JoinHandle<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v3/push/app", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
                reply_status,
                reply_body.len(),
                reply_body
            );
            stream.write_all(response.as_bytes()).await.unwrap();

            request
        });

        (url, handle)
    }

    #[test]
    fn test_production_endpoint() {
        assert_eq!("https://openapi.xg.qq.com/v3/push/app", Endpoint::Production.to_string());
    }

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();

        assert_eq!(Some(20), options.request_timeout_secs);
        assert_eq!(Some(30), options.pool_idle_timeout_secs);
        assert_eq!(100, options.pool_max_idle_per_host);
        assert_eq!(Endpoint::Production, options.endpoint);
        assert!(options.authenticator.is_none());
    }

    #[test]
    fn test_options_chaining() {
        let options = ClientOptions::new(Endpoint::Custom("http://localhost/push".to_string()))
            .with_request_timeout(5)
            .with_pool_idle_timeout(60)
            .with_pool_max_idle_per_host(8)
            .with_authenticator(Authenticator::new("A1", "S1"));

        assert_eq!(Some(5), options.request_timeout_secs);
        assert_eq!(Some(60), options.pool_idle_timeout_secs);
        assert_eq!(8, options.pool_max_idle_per_host);
        assert!(options.authenticator.is_some());
    }

    #[test]
    fn test_default_client_targets_production() {
        let client = Client::default();
        assert_eq!(&Endpoint::Production, client.request_builder().endpoint());
    }

    #[test]
    fn test_request_builder_uses_client_endpoint() {
        let client = Client::new(ClientOptions::new(Endpoint::Custom("http://localhost/push".to_string())));
        let request = client
            .request_builder()
            .single_ios_account("acc1", "T", "C", vec![])
            .unwrap();

        assert_eq!("http://localhost/push", request.uri().to_string());
    }

    #[tokio::test]
    async fn test_send_authorizes_and_parses_response() {
        let (url, server) = serve_once("200 OK", PUSH_REPLY).await;

        let client = Client::new(
            ClientOptions::new(Endpoint::Custom(url)).with_authenticator(Authenticator::new("A1", "S1")),
        );
        let request = client
            .request_builder()
            .single_ios_account("acc1", "T", "C", vec![options::seq(7)])
            .unwrap();

        let response = client.send(request).await.unwrap();
        let (head, body) = server.await.unwrap();

        assert_eq!(0, response.ret_code);
        assert_eq!("123", response.push_id);
        assert_eq!(7, response.seq);

        assert!(head.starts_with("POST /v3/push/app HTTP/1.1"));
        assert!(head.to_lowercase().contains("authorization: basic qte6uze="));
        assert!(body.contains("\"seq\":7"));
    }

    #[tokio::test]
    async fn test_send_with_non_json_reply() {
        let (url, server) = serve_once("502 Bad Gateway", "upstream down").await;

        let client = Client::new(ClientOptions::new(Endpoint::Custom(url)));
        let request = client
            .request_builder()
            .single_android_account("acc1", "T", "C", vec![])
            .unwrap();

        let result = client.send(request).await;
        server.await.unwrap();

        assert!(matches!(result, Err(Error::ResponseError(502))));
    }

    #[tokio::test]
    async fn test_send_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/v3/push/app", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = Client::new(ClientOptions::new(Endpoint::Custom(url)).with_request_timeout(1));
        let request = client
            .request_builder()
            .single_android_account("acc1", "T", "C", vec![])
            .unwrap();

        let result = client.send(request).await;
        server.abort();

        assert!(matches!(result, Err(Error::RequestTimeout(1))));
    }
}
