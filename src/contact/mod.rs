//! Contact channels: messenger deep links, shared calculation messages and
//! QR codes for the contact dialog.

pub mod deep_link;
pub mod message;
pub mod qr;

pub use deep_link::DeepLink;
pub use message::{share_message, GREETING};
pub use qr::qr_data_uri;
