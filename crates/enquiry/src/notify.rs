use serde::Serialize;
use strum::{AsRefStr, Display};

pub const SUCCESS_MESSAGE: &str =
    "Thank you for reaching to us. We will get back to you as soon as possible😊.";
pub const FAILURE_MESSAGE: &str = "Ahh, something went wrong. Please try again.";

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Surface that shows the visitor how a submission ended (dialog, toast,
/// banner...).
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        self.push(Notification {
            kind,
            message: message.to_owned(),
        });
    }
}
