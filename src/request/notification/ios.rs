use crate::request::message::{Aps, IosParams, Message};
use crate::request::notification::NotificationBuilder;
use crate::request::payload::{AudienceType, MessageType, Platform, Request};
use std::collections::BTreeMap;

/// A builder for a notification bar push to a single iOS account.
///
/// # Example
///
/// ```rust
/// # use xinge::request::notification::{IosAccountNotificationBuilder, NotificationBuilder};
/// # fn main() {
/// let request = IosAccountNotificationBuilder::new("acc1", "Hi there", "What's up?")
///     .set_badge(3)
///     .set_sound("ping.caf")
///     .build();
///
/// assert_eq!(Some(vec!["acc1".to_string()]), request.account_list);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IosAccountNotificationBuilder {
    account: String,
    title: String,
    content: String,
    badge: i32,
    sound: String,
}

impl IosAccountNotificationBuilder {
    /// Creates a builder with a badge of one and the default sound.
    pub fn new<A, T, C>(account: A, title: T, content: C) -> IosAccountNotificationBuilder
    where
        A: Into<String>,
        T: Into<String>,
        C: Into<String>,
    {
        IosAccountNotificationBuilder {
            account: account.into(),
            title: title.into(),
            content: content.into(),
            badge: 1,
            sound: String::from("default"),
        }
    }

    /// A number to show on a badge on top of the app icon.
    pub fn set_badge(mut self, badge: i32) -> Self {
        self.badge = badge;
        self
    }

    /// File name of the sound to play when receiving the notification.
    pub fn set_sound<S: Into<String>>(mut self, sound: S) -> Self {
        self.sound = sound.into();
        self
    }
}

impl NotificationBuilder for IosAccountNotificationBuilder {
    fn build(self) -> Request {
        let mut alert = BTreeMap::new();
        alert.insert(String::from("title"), self.title.clone());
        alert.insert(String::from("content"), self.content.clone());

        Request {
            audience_type: AudienceType::Account,
            platform: Platform::Ios,
            message_type: MessageType::Notify,
            account_list: Some(vec![self.account]),
            message: Message {
                title: Some(self.title),
                content: Some(self.content),
                ios: Some(IosParams {
                    aps: Some(Aps {
                        alert: Some(alert),
                        badge: Some(self.badge),
                        sound: Some(self.sound),
                        ..Default::default()
                    }),
                    custom: None,
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
