//! Outbound contact mail via the Resend API
//!
//! Submissions from the contact view are validated here and forwarded as a
//! single JSON POST. The API key comes from the environment; a missing key
//! is a configuration problem reported to the caller, not a panic.

use anyhow::bail;

use crate::config::Config;

/// Environment variable holding the Resend API key.
pub const API_KEY_ENV: &str = "RESEND_API_KEY";

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// A contact-form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields are required; whitespace-only input counts as empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err("All fields are required".to_string());
        }
        Ok(())
    }
}

/// Client for the email-sending service.
pub struct MailClient {
    endpoint: String,
    api_key: String,
    recipient: String,
    sender_name: String,
}

impl MailClient {
    /// Build a client from config plus the `RESEND_API_KEY` environment
    /// variable.
    pub fn from_env(config: &Config) -> Result<Self, String> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                "Email service is not configured. Please contact the administrator.".to_string()
            })?;
        Ok(Self::new(
            RESEND_ENDPOINT.to_string(),
            api_key,
            config.recipient_email.clone(),
            config.sender_name.clone(),
        ))
    }

    /// Client against an explicit endpoint (tests point this at a local
    /// HTTP server).
    pub fn new(endpoint: String, api_key: String, recipient: String, sender_name: String) -> Self {
        Self {
            endpoint,
            api_key,
            recipient,
            sender_name,
        }
    }

    /// Validate and forward a submission. Blocks until the service
    /// responds; the UI treats the whole call as one synchronous step.
    pub fn send(&self, message: &ContactMessage) -> anyhow::Result<()> {
        if let Err(reason) = message.validate() {
            bail!(reason);
        }

        let payload = serde_json::json!({
            "from": format!("{} <onboarding@resend.dev>", self.sender_name),
            "to": self.recipient,
            "reply_to": message.email,
            "subject": format!("New Portfolio Contact from {}", message.name),
            "html": html_body(message),
        });

        tracing::debug!(endpoint = %self.endpoint, "sending contact mail");
        match ureq::post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(payload)
        {
            Ok(_) => {
                tracing::info!(from = %message.email, "contact mail delivered");
                Ok(())
            }
            Err(ureq::Error::Status(code, _)) => {
                bail!("mail service returned status {code}")
            }
            Err(err) => bail!("failed to reach mail service: {err}"),
        }
    }
}

/// HTML body matching the shape the recipient's inbox rules expect:
/// sender details up top, the message itself quoted below.
fn html_body(message: &ContactMessage) -> String {
    let text = escape_html(&message.message).replace('\n', "<br>");
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <h3>Message:</h3>\
         <p style=\"border-left: 4px solid #f59e0b; padding-left: 15px;\">{text}</p>\
         <p style=\"font-size: 12px; color: #888;\">This email was sent from your \
         portfolio contact form. You can reply directly to respond to {name}.</p>\
         </div>",
        name = escape_html(&message.name),
        email = escape_html(&message.email),
        text = text,
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_message() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_any_empty_field() {
        for field in ["name", "email", "message"] {
            let mut msg = filled();
            match field {
                "name" => msg.name.clear(),
                "email" => msg.email = "   ".to_string(),
                _ => msg.message.clear(),
            }
            assert_eq!(
                msg.validate(),
                Err("All fields are required".to_string()),
                "empty {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_html_body_escapes_markup_and_keeps_line_breaks() {
        let msg = ContactMessage {
            name: "<script>".to_string(),
            email: "a@b.c".to_string(),
            message: "line one\nline <two>".to_string(),
        };
        let body = html_body(&msg);
        assert!(body.contains("&lt;script&gt;"));
        assert!(body.contains("line one<br>line &lt;two&gt;"));
        assert!(!body.contains("<script>"));
    }
}
