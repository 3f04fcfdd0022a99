//! Basic authentication for the push API

use crate::error::Error;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::fmt;

/// Adds the `Authorization` and `Content-Type` headers Xinge expects, using
/// the application id and secret key from the Xinge console.
///
/// Android and iOS applications have separate credentials, so a push with
/// `Platform::All` is authorized with the credentials of one of them.
///
/// ```rust
/// # use xinge::auth::Authenticator;
/// # fn main() {
/// let authenticator = Authenticator::new("A1", "S1");
/// assert_eq!("Basic QTE6UzE=", authenticator.header_value());
/// # }
/// ```
#[derive(Clone)]
pub struct Authenticator {
    app_id: String,
    secret_key: String,
}

impl Authenticator {
    pub fn new<A, S>(app_id: A, secret_key: S) -> Authenticator
    where
        A: Into<String>,
        S: Into<String>,
    {
        Authenticator {
            app_id: app_id.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// `Basic` followed by the base64 encoded `app_id:secret_key`.
    pub fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.app_id, self.secret_key);
        format!("Basic {}", STANDARD.encode(credentials))
    }

    /// Sets the headers on a built request, replacing existing values.
    pub fn authorize<B>(&self, request: &mut http::Request<B>) -> Result<(), Error> {
        let auth = HeaderValue::from_str(&self.header_value())?;

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(app_id = %self.app_id, "Authorizing push request");
        }

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(())
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("app_id", &self.app_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
