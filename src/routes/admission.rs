use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use playschool_enquiry::{
    EnquiryFormController, Field, FormFields, Notification, SubmissionStatus, ValidationErrors,
};

use crate::{routes::AppState, template::render};

/// Order the fields appear on the page.
const LAYOUT: [Field; 6] = [
    Field::DateOfBirth,
    Field::Name,
    Field::PhoneNumber,
    Field::Email,
    Field::City,
    Field::Message,
];

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// Empty when the field passed validation
    pub error: String,
    pub required: bool,
    pub multiline: bool,
}

impl FieldView {
    fn new(field: Field, fields: &FormFields, errors: &ValidationErrors) -> Self {
        let (label, input_type, placeholder) = match field {
            Field::DateOfBirth => (
                "Child's Date of Birth*",
                "date",
                "What's your child's age?",
            ),
            Field::Name => ("Your Name*", "text", "Your Name"),
            Field::PhoneNumber => ("Your Mobile Number*", "tel", "Your Mobile Number"),
            Field::Email => ("Email*", "email", "Your Email ID"),
            Field::City => ("Your City*", "text", "Your City"),
            Field::Message => ("Any questions or extra details?", "text", "Your Message"),
        };

        Self {
            name: field.into(),
            label,
            input_type,
            placeholder,
            value: fields.get(field).to_owned(),
            error: errors.get(field).unwrap_or_default().to_owned(),
            required: field.is_required(),
            multiline: field == Field::Message,
        }
    }
}

fn field_views(fields: &FormFields, errors: &ValidationErrors) -> Vec<FieldView> {
    LAYOUT
        .iter()
        .map(|field| FieldView::new(*field, fields, errors))
        .collect()
}

#[derive(askama::Template)]
#[template(path = "admission.html")]
pub struct AdmissionTemplate {
    pub fields: Vec<FieldView>,
    pub notifications: Vec<Notification>,
}

pub async fn page() -> impl IntoResponse {
    render(AdmissionTemplate {
        fields: field_views(&FormFields::default(), &ValidationErrors::default()),
        notifications: Vec::new(),
    })
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<FormFields>,
) -> impl IntoResponse {
    let mut controller =
        EnquiryFormController::new(app_state.recipient, app_state.sender, Vec::new())
            .with_fields(input);

    let status = controller.submit().await;

    let code = if !controller.errors().is_empty() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if status == SubmissionStatus::Failed {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    let fields = field_views(controller.fields(), controller.errors());

    (
        code,
        render(AdmissionTemplate {
            fields,
            notifications: controller.into_notifier(),
        }),
    )
}
