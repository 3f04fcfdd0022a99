//! Turning a [Request](../payload/struct.Request.html) into an HTTP request

use crate::client::Endpoint;
use crate::error::Error;
use crate::request::notification::{
    AndroidAccountNotificationBuilder, IosAccountNotificationBuilder, NotificationBuilder,
};
use crate::request::options::RequestOption;
use crate::request::payload::Request;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use std::convert::Infallible;

/// The body type of the built requests.
pub type PushBody = BoxBody<Bytes, Infallible>;

/// A `POST` request to the push endpoint, not yet authorized.
pub type PushRequest = http::Request<PushBody>;

/// Builds HTTP requests for the configured [Endpoint](../../client/enum.Endpoint.html).
/// Nothing is sent; pass the result to an
/// [Authenticator](../../auth/struct.Authenticator.html) and a
/// [Client](../../client/struct.Client.html).
///
/// # Example
///
/// ```rust
/// # use xinge::client::Endpoint;
/// # use xinge::request::builder::PushRequestBuilder;
/// # use xinge::request::options;
/// # fn main() {
/// let builder = PushRequestBuilder::new(Endpoint::Custom("http://localhost:8080/v3/push/app".into()));
/// let request = builder
///     .single_ios_account("acc1", "Hi there", "What's up?", vec![options::env_dev()])
///     .unwrap();
///
/// assert_eq!("http://localhost:8080/v3/push/app", request.uri().to_string());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PushRequestBuilder {
    endpoint: Endpoint,
}

impl PushRequestBuilder {
    pub fn new(endpoint: Endpoint) -> PushRequestBuilder {
        PushRequestBuilder { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// A notification to a single iOS account, with a badge of one and the
    /// default sound, modified by `options`.
    pub fn single_ios_account<A, T, C, I>(
        &self,
        account: A,
        title: T,
        content: C,
        options: I,
    ) -> Result<PushRequest, Error>
    where
        A: Into<String>,
        T: Into<String>,
        C: Into<String>,
        I: IntoIterator<Item = RequestOption>,
    {
        let request = IosAccountNotificationBuilder::new(account, title, content).build();
        self.build(request, options)
    }

    /// A plain notification to a single Android account, modified by
    /// `options`.
    pub fn single_android_account<A, T, C, I>(
        &self,
        account: A,
        title: T,
        content: C,
        options: I,
    ) -> Result<PushRequest, Error>
    where
        A: Into<String>,
        T: Into<String>,
        C: Into<String>,
        I: IntoIterator<Item = RequestOption>,
    {
        let request = AndroidAccountNotificationBuilder::new(account, title, content).build();
        self.build(request, options)
    }

    /// Applies `options` to `request` in order and encodes the result as the
    /// body of a `POST` to the endpoint.
    pub fn build<I>(&self, mut request: Request, options: I) -> Result<PushRequest, Error>
    where
        I: IntoIterator<Item = RequestOption>,
    {
        request.apply(options);

        let payload_json = request.to_json_string()?;

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(endpoint = %self.endpoint, body = %payload_json, "Built push request");
        }

        http::Request::builder()
            .uri(self.endpoint.to_string())
            .method(Method::POST)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, payload_json.len())
            .body(Full::from(payload_json.into_bytes()).boxed())
            .map_err(Error::BuildRequestError)
    }
}
