//! The push request body, the options modifying it and the HTTP request
//! builder

pub mod builder;
pub mod message;
pub mod notification;
pub mod options;
pub mod payload;
