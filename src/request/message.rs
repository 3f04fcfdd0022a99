//! The `message` object and its platform specific parts

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The content of a push: the text shown to the user and the platform
/// specific parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,

    /// Time windows in which the device accepts the message.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub accept_time: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub android: Option<AndroidParams>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ios: Option<IosParams>,
}

impl Message {
    /// The Android parameters, created empty if not yet present.
    pub fn android_mut(&mut self) -> &mut AndroidParams {
        self.android.get_or_insert_with(Default::default)
    }

    /// The iOS parameters, created empty if not yet present.
    pub fn ios_mut(&mut self) -> &mut IosParams {
        self.ios.get_or_insert_with(Default::default)
    }

    /// Sets a key of the iOS `aps.alert` dictionary, creating the iOS
    /// parameters, the `aps` and the alert when missing.
    pub(crate) fn set_alert_field(&mut self, key: &str, value: String) {
        self.ios_mut()
            .aps_mut()
            .alert
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value);
    }
}

/// Android notification parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AndroidParams {
    /// Notification id. A positive value overwrites the notification with
    /// the same id, a negative value shows only this notification.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub n_id: Option<i32>,

    /// Local notification style id.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub builder_id: Option<i32>,

    /// Set to one to ring when receiving the notification.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ring: Option<i32>,

    /// Sound resource file name under `res/raw`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ring_raw: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vibrate: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lights: Option<i32>,

    /// Set to one to let the user clear the notification.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub clearable: Option<i32>,

    /// Zero for an application icon, one for an icon from `icon_res`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon_type: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon_res: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub style_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub small_icon: Option<i32>,

    /// What happens when the user taps the notification.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action: Option<BTreeMap<String, Value>>,

    /// Application specific key-value data.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom_content: Option<BTreeMap<String, String>>,
}

/// iOS notification parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct IosParams {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aps: Option<Aps>,

    /// Application specific key-value data.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom: Option<BTreeMap<String, String>>,
}

impl IosParams {
    /// The `aps` payload, created empty if not yet present.
    pub fn aps_mut(&mut self) -> &mut Aps {
        self.aps.get_or_insert_with(Default::default)
    }
}

/// The pre-defined `aps` notification data, see Apple's payload reference.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Aps {
    /// The notification texts, keyed by `title` and `content`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alert: Option<BTreeMap<String, String>>,

    /// A number shown on top of the app icon.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub badge: Option<i32>,

    /// When a notification includes the category key, the system displays the
    /// actions for that category as buttons in the banner or alert interface.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,

    /// Set to one for silent notifications.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content_available: Option<u8>,

    /// The name of the sound file to play when user receives the notification.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sound: Option<String>,
}
