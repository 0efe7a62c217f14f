//! Notification use cases
//!
//! Use cases translate incoming commands into domain messages, run them
//! through the notification service and map the outcome back for callers.

mod send_order_ready_notification;

pub use send_order_ready_notification::{
  SUCCESS_MESSAGE, SendOrderReadyNotificationCommand, SendOrderReadyNotificationResponse,
  SendOrderReadyNotificationUseCase,
};
