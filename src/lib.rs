//! # Xinge
//!
//! A client for the [Tencent Xinge](https://xg.qq.com) v3 push API.
//!
//! A push is described by a [Request](request/payload/struct.Request.html),
//! usually created for a common shape with one of the
//! [notification builders](request/notification/index.html) and then
//! modified with [options](request/options/index.html) applied in order.
//! The [PushRequestBuilder](request/builder/struct.PushRequestBuilder.html)
//! encodes the result as an HTTP `POST` to the configured
//! [Endpoint](client/enum.Endpoint.html); the
//! [Authenticator](auth/struct.Authenticator.html) adds the credentials and
//! the [Client](client/struct.Client.html) sends it.
//!
//! Building a request never touches the network. Sending, timeouts and
//! interpreting the `ret_code` of the reply are up to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use xinge::{options, Authenticator, Client, ClientOptions, Endpoint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), xinge::Error> {
//!     let client = Client::new(
//!         ClientOptions::new(Endpoint::Production)
//!             .with_authenticator(Authenticator::new("app-id", "secret-key")),
//!     );
//!
//!     let request = client.request_builder().single_ios_account(
//!         "account-1",
//!         "Hi there",
//!         "What's up?",
//!         vec![options::env_dev(), options::custom_content_set("room", "42")],
//!     )?;
//!
//!     let response = client.send(request).await?;
//!     println!("{:?}", response);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Tracing
//!
//! With the `tracing` feature enabled, building, authorizing and sending
//! requests emit [tracing](https://docs.rs/tracing) events.

pub mod auth;
pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use crate::auth::Authenticator;
pub use crate::client::{Client, ClientOptions, Endpoint};
pub use crate::error::Error;
pub use crate::request::builder::{PushRequest, PushRequestBuilder};
pub use crate::request::message::{AndroidParams, Aps, IosParams, Message};
pub use crate::request::notification::{
    AndroidAccountNotificationBuilder, IosAccountNotificationBuilder, NotificationBuilder,
};
pub use crate::request::options::{self, RequestOption};
pub use crate::request::payload::{
    AudienceType, Environment, MessageType, Platform, Request, TagList, TagOperation,
};
pub use crate::response::PushResponse;
