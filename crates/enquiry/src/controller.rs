use strum::{AsRefStr, Display};

use crate::{
    FAILURE_MESSAGE, Field, FormFields, NotificationKind, NotificationSender, Notifier, Recipient,
    SUCCESS_MESSAGE, SendError, TemplateContext, ValidationErrors, validate,
};

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of [`EnquiryFormController::begin_submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Required fields are blank; errors are stored on the controller.
    Invalid,
    /// A previous submission has not settled yet; nothing changed.
    Busy,
    /// Status is now `Submitting`; the context must be sent and the outcome
    /// passed to [`EnquiryFormController::settle`].
    Ready(TemplateContext),
}

/// State of one admission enquiry form for the lifetime of a page visit.
///
/// `begin_submit` refuses to start a second submission while one is in
/// flight. Fields stay editable in every status.
pub struct EnquiryFormController<S, N> {
    fields: FormFields,
    errors: ValidationErrors,
    status: SubmissionStatus,
    recipient: Recipient,
    sender: S,
    notifier: N,
}

impl<S, N: Notifier> EnquiryFormController<S, N> {
    pub fn new(recipient: Recipient, sender: S, notifier: N) -> Self {
        Self {
            fields: FormFields::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            recipient,
            sender,
            notifier,
        }
    }

    pub fn with_fields(mut self, fields: FormFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn begin_submit(&mut self) -> Submission {
        if self.status == SubmissionStatus::Submitting {
            tracing::debug!("submit ignored, previous enquiry still in flight");

            return Submission::Busy;
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "enquiry form has blank required fields");
            self.errors = errors;

            return Submission::Invalid;
        }

        self.errors = ValidationErrors::default();
        self.status = SubmissionStatus::Submitting;

        Submission::Ready(TemplateContext::new(&self.fields, &self.recipient))
    }

    pub fn settle(&mut self, outcome: Result<(), SendError>) -> SubmissionStatus {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!(status = %self.status, "settle called without a submission in flight");

            return self.status;
        }

        match outcome {
            Ok(()) => {
                tracing::info!("admission enquiry sent");
                self.status = SubmissionStatus::Succeeded;
                self.fields.clear();
                self.notifier
                    .notify(NotificationKind::Success, SUCCESS_MESSAGE);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to send admission enquiry");
                self.status = SubmissionStatus::Failed;
                self.notifier
                    .notify(NotificationKind::Failure, FAILURE_MESSAGE);
            }
        }

        self.status
    }
}

impl<S: NotificationSender, N: Notifier> EnquiryFormController<S, N> {
    pub async fn submit(&mut self) -> SubmissionStatus {
        let Submission::Ready(context) = self.begin_submit() else {
            return self.status;
        };

        let outcome = self.sender.send(&context).await;

        self.settle(outcome)
    }
}
