use crate::request::message::Message;
use crate::request::notification::NotificationBuilder;
use crate::request::payload::{AudienceType, MessageType, Platform, Request};

/// A builder for a plain notification bar push to a single Android account.
/// The Android parameters are left to the server defaults; set them with
/// [options](../options/index.html).
///
/// # Example
///
/// ```rust
/// # use xinge::request::notification::{AndroidAccountNotificationBuilder, NotificationBuilder};
/// # use xinge::request::payload::Platform;
/// # fn main() {
/// let request = AndroidAccountNotificationBuilder::new("acc1", "Hi there", "What's up?").build();
///
/// assert_eq!(Platform::Android, request.platform);
/// assert!(request.message.android.is_none());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AndroidAccountNotificationBuilder {
    account: String,
    title: String,
    content: String,
}

impl AndroidAccountNotificationBuilder {
    pub fn new<A, T, C>(account: A, title: T, content: C) -> AndroidAccountNotificationBuilder
    where
        A: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        AndroidAccountNotificationBuilder {
            account: account.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

impl NotificationBuilder for AndroidAccountNotificationBuilder {
    fn build(self) -> Request {
        Request {
            audience_type: AudienceType::Account,
            platform: Platform::Android,
            message_type: MessageType::Notify,
            account_list: Some(vec![self.account]),
            message: Message {
                title: Some(self.title),
                content: Some(self.content),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
