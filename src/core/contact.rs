use crate::domain::model::ContactForm;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use reqwest::Client;
use serde::Serialize;

/// Fixed label identifying where a submission came from.
const SUBMISSION_SOURCE: &str = "Chels Essence Beauty Website";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactPayload<'a> {
    name: &'a str,
    phone: &'a str,
    message: &'a str,
    source: &'a str,
    submitted_at: String,
}

// The web form marks every field required; the CLI applies the same rule
// before submitting.
impl Validate for ContactForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("phone", &self.phone)?;
        validate_non_empty_string("message", &self.message)?;
        Ok(())
    }
}

/// Forwards contact-form enquiries to the configured external webhook.
pub struct ContactClient<C: ConfigProvider> {
    client: Client,
    config: C,
}

impl<C: ConfigProvider> ContactClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Single POST, no retry. Success is a 2xx response; anything else is a
    /// submit error. The form is borrowed so callers keep it around for
    /// resubmission after a failure.
    pub async fn submit(&self, form: &ContactForm) -> Result<()> {
        let payload = ContactPayload {
            name: &form.name,
            phone: &form.phone,
            message: &form.message,
            source: SUBMISSION_SOURCE,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        };

        tracing::debug!("Submitting enquiry to {}", self.config.webhook_url());
        let response = self
            .client
            .post(self.config.webhook_url())
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            tracing::info!("Enquiry forwarded to webhook");
            Ok(())
        } else {
            Err(CatalogError::SubmitError {
                status: response.status().as_u16(),
            })
        }
    }
}
