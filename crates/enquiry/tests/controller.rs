use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use playschool_enquiry::{
    EnquiryFormController, FAILURE_MESSAGE, Field, FormFields, Notification, NotificationKind,
    NotificationSender, Recipient, SUCCESS_MESSAGE, SendError, Submission, SubmissionStatus,
    TemplateContext,
};
use strum::VariantArray;

#[derive(Clone, Default)]
struct RecordingSender {
    sent: Arc<Mutex<Vec<TemplateContext>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingSender {
    fn failing() -> Self {
        let sender = Self::default();
        sender.failing.store(true, Ordering::SeqCst);
        sender
    }

    fn sent(&self) -> Vec<TemplateContext> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, context: &TemplateContext) -> Result<(), SendError> {
        self.sent.lock().unwrap().push(context.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(SendError::Rejected {
                status: 400,
                body: "The service ID is invalid".to_owned(),
            });
        }

        Ok(())
    }
}

fn valid_fields() -> FormFields {
    FormFields {
        name: "Asha".to_owned(),
        email: "a@x.com".to_owned(),
        date_of_birth: "2019-01-01".to_owned(),
        city: "Pune".to_owned(),
        phone_number: "9999999999".to_owned(),
        message: String::new(),
    }
}

fn controller(
    sender: RecordingSender,
) -> EnquiryFormController<RecordingSender, Vec<Notification>> {
    EnquiryFormController::new(Recipient::new("office@school.test"), sender, Vec::new())
}

#[test]
fn test_field_change_touches_only_that_field() {
    let mut form = controller(RecordingSender::default()).with_fields(valid_fields());

    for field in Field::VARIANTS {
        let before = form.fields().clone();
        form.on_field_change(*field, "changed");

        for other in Field::VARIANTS.iter().filter(|f| *f != field) {
            assert_eq!(form.fields().get(*other), before.get(*other));
        }
        assert_eq!(form.fields().get(*field), "changed");
    }

    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn test_blank_form_is_not_sent() {
    let sender = RecordingSender::default();
    let mut form = controller(sender.clone());

    let status = form.submit().await;

    assert_eq!(status, SubmissionStatus::Idle);
    assert_eq!(form.errors().len(), 5);
    assert!(sender.sent().is_empty());
    assert!(form.notifier().is_empty());
}

#[tokio::test]
async fn test_valid_form_is_sent_and_reset() {
    let sender = RecordingSender::default();
    let mut form = controller(sender.clone()).with_fields(valid_fields());

    let status = form.submit().await;

    assert_eq!(status, SubmissionStatus::Succeeded);

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0],
        TemplateContext {
            from_name: "Asha".to_owned(),
            from_email: "a@x.com".to_owned(),
            from_dob: "2019-01-01".to_owned(),
            from_city: "Pune".to_owned(),
            from_number: "9999999999".to_owned(),
            to_name: "Prakashplayschool".to_owned(),
            to_email: "office@school.test".to_owned(),
        }
    );

    assert!(form.fields().is_empty());
    assert!(form.errors().is_empty());
    assert_eq!(
        form.notifier(),
        &vec![Notification {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_owned(),
        }]
    );
}

#[tokio::test]
async fn test_success_also_resets_message() {
    let mut fields = valid_fields();
    fields.message = "Is there a bus service?".to_owned();
    let mut form = controller(RecordingSender::default()).with_fields(fields);

    form.submit().await;

    assert_eq!(form.fields().message, "");
}

#[tokio::test]
async fn test_failed_send_keeps_fields() {
    let sender = RecordingSender::failing();
    let mut form = controller(sender.clone()).with_fields(valid_fields());

    let status = form.submit().await;

    assert_eq!(status, SubmissionStatus::Failed);
    assert_eq!(sender.sent().len(), 1);
    assert_eq!(form.fields(), &valid_fields());
    assert_eq!(
        form.into_notifier(),
        vec![Notification {
            kind: NotificationKind::Failure,
            message: FAILURE_MESSAGE.to_owned(),
        }]
    );
}

#[tokio::test]
async fn test_retry_after_failure_sends_once_more() {
    let sender = RecordingSender::failing();
    let mut form = controller(sender.clone()).with_fields(valid_fields());

    assert_eq!(form.submit().await, SubmissionStatus::Failed);
    assert_eq!(sender.sent().len(), 1);

    sender.failing.store(false, Ordering::SeqCst);

    assert_eq!(form.submit().await, SubmissionStatus::Succeeded);
    assert_eq!(sender.sent().len(), 2);
    assert_eq!(form.notifier().len(), 2);
}

#[tokio::test]
async fn test_validation_failure_keeps_previous_status() {
    let mut form = controller(RecordingSender::failing()).with_fields(valid_fields());

    assert_eq!(form.submit().await, SubmissionStatus::Failed);

    form.on_field_change(Field::Name, "   ");
    let status = form.submit().await;

    assert_eq!(status, SubmissionStatus::Failed);
    assert_eq!(form.errors().get(Field::Name), Some("Name is required"));
    assert_eq!(form.notifier().len(), 1);
}

#[test]
fn test_submit_is_ignored_while_in_flight() {
    let sender = RecordingSender::default();
    let mut form = controller(sender.clone()).with_fields(valid_fields());

    let Submission::Ready(context) = form.begin_submit() else {
        panic!("valid form should be ready to send");
    };
    assert_eq!(context.from_city, "Pune");
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    assert_eq!(form.begin_submit(), Submission::Busy);
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    form.on_field_change(Field::Message, "typed while sending");
    assert_eq!(form.fields().message, "typed while sending");

    assert_eq!(form.settle(Ok(())), SubmissionStatus::Succeeded);
    assert_eq!(form.notifier().len(), 1);
    assert!(sender.sent().is_empty());
}

#[test]
fn test_settle_without_submission_is_ignored() {
    let mut form = controller(RecordingSender::default()).with_fields(valid_fields());

    let status = form.settle(Err(SendError::Transport("connection reset".to_owned())));

    assert_eq!(status, SubmissionStatus::Idle);
    assert!(form.notifier().is_empty());
    assert_eq!(form.fields(), &valid_fields());
}

#[test]
fn test_invalid_submission_clears_once_fixed() {
    let mut form = controller(RecordingSender::default());

    assert_eq!(form.begin_submit(), Submission::Invalid);
    assert_eq!(form.errors().len(), 5);

    for field in Field::REQUIRED {
        form.on_field_change(field, "x");
    }

    assert!(matches!(form.begin_submit(), Submission::Ready(_)));
    assert!(form.errors().is_empty());
}
