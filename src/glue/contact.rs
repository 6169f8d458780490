//! Contact form submitted through a third-party email relay.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ScrollreelError, ScrollreelResult};

const SENDING_LABEL: &str = "Sending...";
const SENT_LABEL: &str = "Sent";
const SUCCESS_MESSAGE: &str = "Message Sent Successfully!";
const FAILURE_MESSAGE: &str = "Failed to send. Please try again.";
const RESTORE_AFTER_SECS: f64 = 5.0;

/// Account identifiers for the relay service.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelayConfig {
    /// Public (browser-safe) key.
    pub public_key: String,
    /// Service id.
    pub service_id: String,
    /// Template id.
    pub template_id: String,
}

/// Request body handed to the relay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RelayRequest {
    /// Service id.
    pub service_id: String,
    /// Template id.
    pub template_id: String,
    /// Public key, under the name the relay API expects.
    pub user_id: String,
    /// Form fields by name.
    pub template_params: serde_json::Map<String, serde_json::Value>,
}

/// Email delivery seam.
pub trait MailRelay {
    /// Deliver one message.
    fn send(&mut self, request: &RelayRequest) -> anyhow::Result<()>;
}

/// Tone of the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Delivery succeeded.
    Success,
    /// Delivery failed.
    Error,
}

impl StatusTone {
    /// Display color.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Success => Rgba8([0x00, 0xff, 0x9d, 0xff]),
            Self::Error => Rgba8([0xff, 0x4d, 0x4d, 0xff]),
        }
    }
}

/// Status line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    /// Tone.
    pub tone: StatusTone,
    /// Text color for the tone.
    pub color: Rgba8,
    /// Message.
    pub message: String,
}

/// Submit button appearance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    /// Label.
    pub label: String,
    /// Whether clicks are ignored.
    pub disabled: bool,
}

/// Contact form state machine.
pub struct ContactForm {
    relay: Option<(RelayConfig, Box<dyn MailRelay>)>,
    fields: Vec<(String, String)>,
    idle_label: String,
    button: SubmitButton,
    status: Option<FormStatus>,
    restore_at: Option<f64>,
}

impl ContactForm {
    /// Form with the given submit label. Without a relay the form stays disabled.
    pub fn new(idle_label: impl Into<String>, relay: Option<(RelayConfig, Box<dyn MailRelay>)>) -> Self {
        let idle_label = idle_label.into();
        if relay.is_none() {
            tracing::warn!("email relay not configured; contact form disabled");
        }
        Self {
            button: SubmitButton {
                label: idle_label.clone(),
                disabled: relay.is_none(),
            },
            relay,
            fields: Vec::new(),
            idle_label,
            status: None,
            restore_at: None,
        }
    }

    /// Set a field, keeping first-insertion order.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Current value of `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Button appearance.
    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Visible status line.
    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// Serialize the form into a relay request and enter the sending state.
    pub fn begin_submit(&mut self) -> ScrollreelResult<RelayRequest> {
        let Some((config, _)) = self.relay.as_ref() else {
            return Err(ScrollreelError::validation(
                "contact form has no email relay",
            ));
        };
        if self.button.disabled {
            return Err(ScrollreelError::validation(
                "contact form is already submitting",
            ));
        }
        let template_params = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        let request = RelayRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params,
        };
        self.button = SubmitButton {
            label: SENDING_LABEL.to_string(),
            disabled: true,
        };
        Ok(request)
    }

    /// Record the relay outcome of a submission started with [`ContactForm::begin_submit`].
    pub fn finish_submit(&mut self, now_secs: f64, result: anyhow::Result<()>) {
        match result {
            Ok(()) => {
                self.status = Some(FormStatus {
                    tone: StatusTone::Success,
                    color: StatusTone::Success.color(),
                    message: SUCCESS_MESSAGE.to_string(),
                });
                self.button.label = SENT_LABEL.to_string();
                self.fields.clear();
                self.restore_at = Some(now_secs + RESTORE_AFTER_SECS);
            }
            Err(err) => {
                tracing::error!(error = %err, "contact form delivery failed");
                self.status = Some(FormStatus {
                    tone: StatusTone::Error,
                    color: StatusTone::Error.color(),
                    message: FAILURE_MESSAGE.to_string(),
                });
                self.button = SubmitButton {
                    label: self.idle_label.clone(),
                    disabled: false,
                };
            }
        }
    }

    /// Submit through the configured relay.
    pub fn submit(&mut self, now_secs: f64) -> ScrollreelResult<()> {
        let request = self.begin_submit()?;
        let result = match self.relay.as_mut() {
            Some((_, relay)) => relay.send(&request),
            None => Err(anyhow::anyhow!("email relay disappeared")),
        };
        self.finish_submit(now_secs, result);
        Ok(())
    }

    /// Advance timers: a success notice hides and the button resets after a few seconds.
    pub fn tick(&mut self, now_secs: f64) {
        if let Some(at) = self.restore_at
            && now_secs >= at
        {
            self.restore_at = None;
            self.status = None;
            self.button = SubmitButton {
                label: self.idle_label.clone(),
                disabled: false,
            };
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glue/contact.rs"]
mod tests;
