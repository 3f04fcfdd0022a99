//! Builders for the common push campaign shapes

mod android;
mod ios;

pub use self::android::AndroidAccountNotificationBuilder;
pub use self::ios::IosAccountNotificationBuilder;

use crate::request::payload::Request;

pub trait NotificationBuilder {
    /// Generates the default request, ready to be modified with
    /// [options](../options/index.html).
    fn build(self) -> Request;
}
