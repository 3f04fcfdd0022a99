//! The push request body sent to Xinge

use crate::error::Error;
use crate::request::message::Message;
use erased_serde::Serialize as ErasedSerialize;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who receives the push.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AudienceType {
    /// Every device of the application.
    #[default]
    All,
    /// Devices matching the [TagList](struct.TagList.html).
    Tag,
    /// A single device token. Only the first entry of `token_list` is pushed.
    Token,
    /// Up to 1000 device tokens.
    TokenList,
    /// A single account. Only the first entry of `account_list` is pushed.
    Account,
    /// Up to 1000 accounts.
    AccountList,
}

/// The platform the push is delivered to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    All,
    Android,
    Ios,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// A notification shown in the notification bar.
    #[default]
    Notify,
    /// A pass-through message on Android, a silent push on iOS.
    Message,
}

/// The iOS push environment. Also echoed back in every
/// [PushResponse](../../response/struct.PushResponse.html).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Product,
    Dev,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagOperation {
    /// Devices having every tag.
    #[default]
    And,
    /// Devices having any of the tags.
    Or,
}

/// The tags to match when pushing with [AudienceType::Tag](enum.AudienceType.html).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    pub tags: Vec<String>,
    pub op: TagOperation,
}

impl TagList {
    pub fn new<I, S>(tags: I, op: TagOperation) -> TagList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagList {
            tags: tags.into_iter().map(Into::into).collect(),
            op,
        }
    }
}

/// A single push campaign. Usually created with one of the
/// [notification builders](../notification/index.html) and modified with
/// [options](../options/index.html).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub audience_type: AudienceType,

    pub platform: Platform,

    pub message: Message,

    pub message_type: MessageType,

    /// Required with `AudienceType::Tag`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tag_list: Option<TagList>,

    /// Required with `AudienceType::Token` and `AudienceType::TokenList`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token_list: Option<Vec<String>>,

    /// Required with `AudienceType::Account` and `AudienceType::AccountList`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub account_list: Option<Vec<String>>,

    /// How long the message is stored for offline devices, in seconds.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expire_time: Option<i64>,

    /// Scheduled send time, `yyyy-MM-DD HH:MM:SS`. A time in the past sends
    /// immediately. Only for full and tag pushes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub send_time: Option<String>,

    /// Deliver to every channel package of the application.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub multi_pkg: bool,

    /// Repeat count of a looping task. Only for full and tag pushes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub loop_times: Option<u32>,

    /// Only meaningful with `Platform::Ios`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub environment: Option<Environment>,

    /// Aggregation tag for the statistics API.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stat_tag: Option<String>,

    /// Echoed back in the response.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seq: Option<i64>,

    /// Must match the account type used when binding the account.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub account_type: Option<i32>,

    /// `"0"` on the first list push, then the `push_id` Xinge returned to
    /// reuse the same content for more recipients.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub push_id: Option<String>,
}

impl Request {
    /// Android tap action built from any serializable value. The value must
    /// serialize into a JSON object; its keys are merged into the existing
    /// action.
    ///
    /// ```rust
    /// # use xinge::request::payload::Request;
    /// # use std::collections::HashMap;
    /// # fn main() {
    /// let mut request = Request::default();
    /// let mut action = HashMap::new();
    /// action.insert("action_type", 1);
    ///
    /// request.set_action_data(&action).unwrap();
    ///
    /// assert_eq!(
    ///     "{\"audience_type\":\"all\",\"platform\":\"all\",\"message\":{\"android\":{\"action\":{\"action_type\":1}}},\"message_type\":\"notify\"}",
    ///     &request.to_json_string().unwrap()
    /// );
    /// # }
    /// ```
    pub fn set_action_data(&mut self, data: &dyn ErasedSerialize) -> Result<&mut Self, Error> {
        let fields = match serde_json::to_value(data)? {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::InvalidOptions(format!(
                    "The action must be a JSON object, got {}",
                    other
                )))
            }
        };

        self.message
            .android_mut()
            .action
            .get_or_insert_with(Default::default)
            .extend(fields);

        Ok(self)
    }

    /// Checks the audience selector against the recipient lists and the
    /// environment against the platform.
    pub fn validate(&self) -> Result<(), Error> {
        let has_tags = self.tag_list.as_ref().map_or(false, |t| !t.tags.is_empty());
        let has_tokens = self.token_list.as_ref().map_or(false, |t| !t.is_empty());
        let has_accounts = self.account_list.as_ref().map_or(false, |a| !a.is_empty());

        let (tags, tokens, accounts) = match self.audience_type {
            AudienceType::All => (false, false, false),
            AudienceType::Tag => (true, false, false),
            AudienceType::Token | AudienceType::TokenList => (false, true, false),
            AudienceType::Account | AudienceType::AccountList => (false, false, true),
        };

        if has_tags != tags {
            return Err(mismatch("tag_list", self.audience_type));
        }
        if has_tokens != tokens {
            return Err(mismatch("token_list", self.audience_type));
        }
        if has_accounts != accounts {
            return Err(mismatch("account_list", self.audience_type));
        }

        if self.environment.is_some() && self.platform != Platform::Ios {
            return Err(Error::InvalidOptions(String::from(
                "The environment can only be set for iOS pushes.",
            )));
        }

        Ok(())
    }

    /// The request body as a JSON string.
    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

fn mismatch(field: &str, audience_type: AudienceType) -> Error {
    Error::InvalidOptions(format!(
        "The {} does not match the audience type {:?}.",
        field, audience_type
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_json::value::to_value;

    #[test]
    fn test_default_request_with_required_fields_only() {
        let expected = json!({
            "audience_type": "all",
            "platform": "all",
            "message": {},
            "message_type": "notify"
        });

        assert_eq!(expected, to_value(Request::default()).unwrap());
    }

    #[test]
    fn test_request_with_full_data() {
        let request = Request {
            audience_type: AudienceType::Tag,
            platform: Platform::Ios,
            message_type: MessageType::Message,
            tag_list: Some(TagList::new(["beijing", "vip"], TagOperation::Or)),
            expire_time: Some(3600),
            send_time: Some("2024-01-02 03:04:05".to_string()),
            multi_pkg: true,
            loop_times: Some(2),
            environment: Some(Environment::Dev),
            stat_tag: Some("active_picture_123".to_string()),
            seq: Some(42),
            account_type: Some(1),
            push_id: Some("0".to_string()),
            ..Default::default()
        };

        let expected = json!({
            "audience_type": "tag",
            "platform": "ios",
            "message": {},
            "message_type": "message",
            "tag_list": { "tags": ["beijing", "vip"], "op": "OR" },
            "expire_time": 3600,
            "send_time": "2024-01-02 03:04:05",
            "multi_pkg": true,
            "loop_times": 2,
            "environment": "dev",
            "stat_tag": "active_picture_123",
            "seq": 42,
            "account_type": 1,
            "push_id": "0"
        });

        assert_eq!(expected, to_value(request).unwrap());
    }

    #[test]
    fn test_audience_type_wire_values() {
        let values: Vec<Value> = [
            AudienceType::All,
            AudienceType::Tag,
            AudienceType::Token,
            AudienceType::TokenList,
            AudienceType::Account,
            AudienceType::AccountList,
        ]
        .iter()
        .map(|a| to_value(a).unwrap())
        .collect();

        assert_eq!(
            json!(["all", "tag", "token", "token_list", "account", "account_list"]),
            Value::Array(values)
        );
    }

    #[test]
    fn test_decoding_keeps_set_fields_and_skips_absent() {
        let json = r#"{
            "audience_type": "account",
            "platform": "ios",
            "message": {
                "title": "T",
                "ios": { "aps": { "alert": { "title": "T" }, "badge": 1, "content-available": 1 } }
            },
            "message_type": "notify",
            "account_list": ["acc1"],
            "seq": 7
        }"#;

        let request: Request = serde_json::from_str(json).unwrap();

        assert_eq!(AudienceType::Account, request.audience_type);
        assert_eq!(Some(vec!["acc1".to_string()]), request.account_list);
        assert_eq!(Some(7), request.seq);
        assert!(!request.multi_pkg);
        assert!(request.token_list.is_none());

        let aps = request.message.ios.as_ref().unwrap().aps.as_ref().unwrap();
        assert_eq!(Some(1), aps.badge);
        assert_eq!(Some(1), aps.content_available);

        let encoded = request.to_json_string().unwrap();
        assert!(!encoded.contains("null"));
        assert!(!encoded.contains("multi_pkg"));
    }

    #[test]
    fn test_action_data_from_struct() {
        #[derive(serde::Serialize)]
        struct Activity {
            action_type: u8,
            activity: &'static str,
        }

        let mut request = Request::default();
        request
            .set_action_data(&Activity {
                action_type: 1,
                activity: "com.example.Main",
            })
            .unwrap();

        let expected = json!({
            "action_type": 1,
            "activity": "com.example.Main"
        });

        let action = request.message.android.unwrap().action.unwrap();
        assert_eq!(expected, to_value(action).unwrap());
    }

    #[test]
    fn test_action_data_must_be_an_object() {
        let mut request = Request::default();
        let result = request.set_action_data(&"not an object");

        assert!(matches!(result, Err(Error::InvalidOptions(_))));
        assert!(request.message.android.is_none());
    }

    #[test]
    fn test_validate_account_push() {
        let request = Request {
            audience_type: AudienceType::Account,
            platform: Platform::Ios,
            account_list: Some(vec!["acc1".to_string()]),
            environment: Some(Environment::Product),
            ..Default::default()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_tag_list() {
        let request = Request {
            audience_type: AudienceType::Tag,
            ..Default::default()
        };

        assert!(matches!(request.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_list_for_wrong_audience() {
        let request = Request {
            audience_type: AudienceType::Account,
            account_list: Some(vec!["acc1".to_string()]),
            token_list: Some(vec!["token".to_string()]),
            ..Default::default()
        };

        assert!(matches!(request.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_environment_on_android() {
        let request = Request {
            platform: Platform::Android,
            environment: Some(Environment::Dev),
            ..Default::default()
        };

        assert!(matches!(request.validate(), Err(Error::InvalidOptions(_))));
    }
}
