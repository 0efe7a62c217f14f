mod adapter;
mod client;

pub use adapter::TwilioSmsAdapter;
pub use client::{TwilioClientError, TwilioSmsClient, validate_phone_number};
