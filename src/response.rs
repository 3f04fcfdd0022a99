//! The reply of the push API

use crate::request::payload::Environment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The body Xinge answers every push request with. A `ret_code` of zero
/// means the push was accepted; any other value comes with an `err_msg`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PushResponse {
    /// The `seq` of the request, echoed back.
    #[serde(default)]
    pub seq: i64,

    /// Identifies the push task. Reuse it as the `push_id` of further list
    /// pushes with the same content.
    #[serde(default)]
    pub push_id: String,

    pub ret_code: i32,

    #[serde(default, with = "optional_environment")]
    pub environment: Option<Environment>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub err_msg: Option<String>,

    /// Extra data of a successful request.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<BTreeMap<String, String>>,
}

/// Represents an environment that may be sent as an empty string
mod optional_environment {
    use crate::request::payload::Environment;
    use serde::{
        de::{self, Deserializer, Unexpected},
        ser::Serializer,
        Deserialize, Serialize,
    };

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Environment>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None | Some("") => Ok(None),
            Some("product") => Ok(Some(Environment::Product)),
            Some("dev") => Ok(Some(Environment::Dev)),
            Some(other) => Err(de::Error::invalid_value(
                Unexpected::Str(other),
                &"product, dev or an empty string",
            )),
        }
    }

    pub fn serialize<S>(value: &Option<Environment>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(environment) => environment.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_response() {
        let json = r#"{
            "seq": 42,
            "push_id": "123",
            "ret_code": 0,
            "environment": "product",
            "result": { "status": "0" }
        }"#;

        let response: PushResponse = serde_json::from_str(json).unwrap();

        assert_eq!(42, response.seq);
        assert_eq!("123", response.push_id);
        assert_eq!(0, response.ret_code);
        assert_eq!(Some(Environment::Product), response.environment);
        assert_eq!(None, response.err_msg);
        assert_eq!(Some(&"0".to_string()), response.result.unwrap().get("status"));
    }

    #[test]
    fn test_error_response_with_empty_environment() {
        let json = r#"{
            "seq": 0,
            "push_id": "",
            "ret_code": 1008001,
            "environment": "",
            "err_msg": "parameter error"
        }"#;

        let response: PushResponse = serde_json::from_str(json).unwrap();

        assert_eq!(1008001, response.ret_code);
        assert_eq!(None, response.environment);
        assert_eq!(Some("parameter error"), response.err_msg.as_deref());
        assert!(response.result.is_none());
    }

    #[test]
    fn test_minimal_response() {
        let response: PushResponse = serde_json::from_str(r#"{"ret_code": 0}"#).unwrap();

        assert_eq!(0, response.seq);
        assert_eq!("", response.push_id);
        assert_eq!(None, response.environment);
    }

    #[test]
    fn test_unknown_environment() {
        let result = serde_json::from_str::<PushResponse>(r#"{"ret_code": 0, "environment": "staging"}"#);
        assert!(result.is_err());
    }
}
