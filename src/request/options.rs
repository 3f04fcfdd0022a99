//! Options modifying a [Request](../payload/struct.Request.html).
//!
//! Every option touches one concern of the request. Options are applied in
//! the order given and a later option overwrites what an earlier one set.
//!
//! ```rust
//! # use xinge::request::options;
//! # use xinge::request::payload::Request;
//! # fn main() {
//! let mut request = Request::default();
//! request.apply(vec![
//!     options::platform_android(),
//!     options::title("first"),
//!     options::title("second"),
//!     options::token_list_add("token-1"),
//! ]);
//!
//! assert_eq!(Some("second"), request.message.title.as_deref());
//! # }
//! ```

use crate::request::message::{Aps, Message};
use crate::request::payload::{
    AudienceType, Environment, MessageType, Platform, Request, TagList,
};
use chrono::{DateTime, TimeZone};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Format of the `send_time` field.
const SEND_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single modification of a push request.
pub struct RequestOption(Box<dyn FnOnce(&mut Request) + Send>);

impl RequestOption {
    /// Wraps a closure into an option, for modifications not covered by the
    /// functions of this module.
    pub fn new<F>(f: F) -> RequestOption
    where
        F: FnOnce(&mut Request) + Send + 'static,
    {
        RequestOption(Box::new(f))
    }

    pub fn apply(self, request: &mut Request) {
        (self.0)(request)
    }
}

impl fmt::Debug for RequestOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RequestOption")
    }
}

impl Request {
    /// Applies the options in order.
    pub fn apply<I>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = RequestOption>,
    {
        for option in options {
            option.apply(self);
        }

        self
    }
}

pub fn platform(p: Platform) -> RequestOption {
    RequestOption::new(move |r| r.platform = p)
}

pub fn platform_ios() -> RequestOption {
    platform(Platform::Ios)
}

pub fn platform_android() -> RequestOption {
    platform(Platform::Android)
}

pub fn platform_all() -> RequestOption {
    platform(Platform::All)
}

/// Push to the production environment. Only has an effect on iOS.
pub fn env_prod() -> RequestOption {
    RequestOption::new(|r| r.environment = Some(Environment::Product))
}

/// Push to the development environment. Only has an effect on iOS.
pub fn env_dev() -> RequestOption {
    RequestOption::new(|r| r.environment = Some(Environment::Dev))
}

/// Sets the message title and the `title` of the iOS alert.
pub fn title<S: Into<String>>(t: S) -> RequestOption {
    let t = t.into();

    RequestOption::new(move |r| {
        r.message.set_alert_field("title", t.clone());
        r.message.title = Some(t);
    })
}

/// Sets the message content and the `content` of the iOS alert.
pub fn content<S: Into<String>>(c: S) -> RequestOption {
    let c = c.into();

    RequestOption::new(move |r| {
        r.message.set_alert_field("content", c.clone());
        r.message.content = Some(c);
    })
}

/// Adds a time window in which the message is accepted.
pub fn accept_time<S: Into<String>>(window: S) -> RequestOption {
    let window = window.into();

    RequestOption::new(move |r| {
        r.message
            .accept_time
            .get_or_insert_with(Vec::new)
            .push(window)
    })
}

/// Replaces the whole message.
pub fn message(m: Message) -> RequestOption {
    RequestOption::new(move |r| r.message = m)
}

pub fn message_type(mt: MessageType) -> RequestOption {
    RequestOption::new(move |r| r.message_type = mt)
}

pub fn n_id(id: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().n_id = Some(id))
}

pub fn builder_id(id: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().builder_id = Some(id))
}

pub fn ring(ring: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().ring = Some(ring))
}

pub fn ring_raw<S: Into<String>>(rr: S) -> RequestOption {
    let rr = rr.into();
    RequestOption::new(move |r| r.message.android_mut().ring_raw = Some(rr))
}

pub fn vibrate(v: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().vibrate = Some(v))
}

pub fn lights(l: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().lights = Some(l))
}

pub fn clearable(c: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().clearable = Some(c))
}

pub fn icon_type(it: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().icon_type = Some(it))
}

pub fn icon_res<S: Into<String>>(ir: S) -> RequestOption {
    let ir = ir.into();
    RequestOption::new(move |r| r.message.android_mut().icon_res = Some(ir))
}

pub fn style_id(s: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().style_id = Some(s))
}

pub fn small_icon(si: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().small_icon = Some(si))
}

/// Replaces the Android tap action.
pub fn action(a: BTreeMap<String, Value>) -> RequestOption {
    RequestOption::new(move |r| r.message.android_mut().action = Some(a))
}

/// Sets one key of the Android tap action.
pub fn action_set<K, V>(k: K, v: V) -> RequestOption
where
    K: Into<String>,
    V: Into<Value>,
{
    let (k, v) = (k.into(), v.into());

    RequestOption::new(move |r| {
        r.message
            .android_mut()
            .action
            .get_or_insert_with(BTreeMap::new)
            .insert(k, v);
    })
}

/// Replaces the custom data of both platforms: Android's `custom_content`
/// and iOS' `custom`.
pub fn custom_content(ct: BTreeMap<String, String>) -> RequestOption {
    RequestOption::new(move |r| {
        r.message.ios_mut().custom = Some(ct.clone());
        r.message.android_mut().custom_content = Some(ct);
    })
}

/// Sets one key of the custom data on both platforms.
pub fn custom_content_set<K, V>(k: K, v: V) -> RequestOption
where
    K: Into<String>,
    V: Into<String>,
{
    let (k, v) = (k.into(), v.into());

    RequestOption::new(move |r| {
        r.message
            .ios_mut()
            .custom
            .get_or_insert_with(BTreeMap::new)
            .insert(k.clone(), v.clone());

        r.message
            .android_mut()
            .custom_content
            .get_or_insert_with(BTreeMap::new)
            .insert(k, v);
    })
}

/// Replaces the iOS `aps` payload.
pub fn aps(aps: Aps) -> RequestOption {
    RequestOption::new(move |r| r.message.ios_mut().aps = Some(aps))
}

pub fn badge(b: i32) -> RequestOption {
    RequestOption::new(move |r| r.message.ios_mut().aps_mut().badge = Some(b))
}

pub fn sound<S: Into<String>>(s: S) -> RequestOption {
    let s = s.into();
    RequestOption::new(move |r| r.message.ios_mut().aps_mut().sound = Some(s))
}

pub fn category<S: Into<String>>(c: S) -> RequestOption {
    let c = c.into();
    RequestOption::new(move |r| r.message.ios_mut().aps_mut().category = Some(c))
}

/// Marks the iOS push as a background update.
pub fn content_available() -> RequestOption {
    RequestOption::new(|r| r.message.ios_mut().aps_mut().content_available = Some(1))
}

pub fn audience_type(at: AudienceType) -> RequestOption {
    RequestOption::new(move |r| r.audience_type = at)
}

pub fn tag_list(tl: TagList) -> RequestOption {
    RequestOption::new(move |r| r.tag_list = Some(tl))
}

pub fn token_list<I, S>(tl: I) -> RequestOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tl: Vec<String> = tl.into_iter().map(Into::into).collect();
    RequestOption::new(move |r| r.token_list = Some(tl))
}

/// Appends a token to `token_list`.
pub fn token_list_add<S: Into<String>>(t: S) -> RequestOption {
    let t = t.into();
    RequestOption::new(move |r| r.token_list.get_or_insert_with(Vec::new).push(t))
}

pub fn account_list<I, S>(al: I) -> RequestOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let al: Vec<String> = al.into_iter().map(Into::into).collect();
    RequestOption::new(move |r| r.account_list = Some(al))
}

/// Appends an account to `account_list`.
pub fn account_list_add<S: Into<String>>(a: S) -> RequestOption {
    let a = a.into();
    RequestOption::new(move |r| r.account_list.get_or_insert_with(Vec::new).push(a))
}

pub fn account_type(at: i32) -> RequestOption {
    RequestOption::new(move |r| r.account_type = Some(at))
}

pub fn push_id<S: Into<String>>(pid: S) -> RequestOption {
    let pid = pid.into();
    RequestOption::new(move |r| r.push_id = Some(pid))
}

/// Sets `expire_time` to the given instant as seconds since the epoch.
pub fn expire_time<Tz: TimeZone>(et: DateTime<Tz>) -> RequestOption {
    let seconds = et.timestamp();
    RequestOption::new(move |r| r.expire_time = Some(seconds))
}

/// Sets `expire_time` to a storage duration in seconds. Zero means the
/// server default of three days.
pub fn expire_seconds(seconds: i64) -> RequestOption {
    RequestOption::new(move |r| r.expire_time = Some(seconds))
}

/// Schedules the push. The instant is written in its own offset as
/// `yyyy-MM-DD HH:MM:SS`.
pub fn send_time<Tz>(st: DateTime<Tz>) -> RequestOption
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let formatted = st.format(SEND_TIME_FORMAT).to_string();
    RequestOption::new(move |r| r.send_time = Some(formatted))
}

pub fn multi_pkg(mp: bool) -> RequestOption {
    RequestOption::new(move |r| r.multi_pkg = mp)
}

pub fn loop_times(lt: u32) -> RequestOption {
    RequestOption::new(move |r| r.loop_times = Some(lt))
}

pub fn stat_tag<S: Into<String>>(st: S) -> RequestOption {
    let st = st.into();
    RequestOption::new(move |r| r.stat_tag = Some(st))
}

pub fn seq(s: i64) -> RequestOption {
    RequestOption::new(move |r| r.seq = Some(s))
}
