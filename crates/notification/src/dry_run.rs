use async_trait::async_trait;
use playschool_enquiry::{NotificationSender, SendError, TemplateContext};

/// Logs each enquiry instead of delivering it. Meant for local development.
#[derive(Clone, Default)]
pub struct DryRunSender;

#[async_trait]
impl NotificationSender for DryRunSender {
    async fn send(&self, context: &TemplateContext) -> Result<(), SendError> {
        tracing::info!(
            from_name = %context.from_name,
            from_email = %context.from_email,
            from_city = %context.from_city,
            to = %context.to_email,
            "Dry run: enquiry not delivered"
        );

        Ok(())
    }
}
