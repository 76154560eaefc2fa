// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for startup warnings and failed background actions.
//!
//! - [`notification`] - `Notification` with severity and an i18n key
//! - [`manager`] - Queue, visibility limit, and auto-dismiss
//! - [`toast`] - Rendering
//!
//! Success and info toasts last 3s, warnings 5s; errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
