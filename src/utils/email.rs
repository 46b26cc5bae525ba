use crate::utils::config::AppConfig;
use async_trait::async_trait;
use log::info;
use serde_json::json;

const MAILTRAP_SEND_URL: &str = "https://send.api.mailtrap.io/api/send";

/// Minimal outbound-send capability. The verification service never
/// interprets provider-specific error shapes beyond the message string.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> Result<(), String>;
}

/// The verification message delivered to the user.
pub struct VerificationEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl VerificationEmail {
    pub fn for_code(code: &str) -> Self {
        VerificationEmail {
            subject: "🔐 Your EasyEyes Verification Code".to_string(),
            text: format!(
                "Your verification code is: {}\n\nThis code is valid for 10 minutes.",
                code
            ),
            html: format!(
                r#"<div style="font-family: Arial, sans-serif; font-size:16px; color:#333;">
  <h2 style="color:#0b5cff;">Your Verification Code</h2>
  <p>Hello,</p>
  <p>Your verification code is:</p>
  <div style="font-size:24px; font-weight:bold; margin:16px 0; color:#000;">
    {}
  </div>
  <p>This code is valid for 10 minutes.</p>
  <p>If you didn't request this code, you can safely ignore this email.</p>
  <br/>
  <p>Thanks,<br/>EasyEyes Team</p>
</div>"#,
                code
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_email_carries_code_and_expiry_note() {
        let message = VerificationEmail::for_code("482913");
        assert_eq!(message.subject, "🔐 Your EasyEyes Verification Code");
        assert!(message.text.starts_with("Your verification code is: 482913"));
        assert!(message.text.contains("valid for 10 minutes"));
        assert!(message.html.contains("482913"));
        assert!(message.html.contains("valid for 10 minutes"));
    }
}

#[cfg(test)]
pub mod mock {
    use super::EmailSender;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Records every outgoing message; can be told to fail the send.
    pub struct MockEmailSender {
        pub sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl MockEmailSender {
        pub fn new() -> Self {
            MockEmailSender {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            MockEmailSender {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        /// The code carried by the last message, pulled out of the text body.
        pub async fn last_code(&self) -> Option<String> {
            let sent = self.sent.lock().await;
            let (_, text) = sent.last()?;
            let rest = text.strip_prefix("Your verification code is: ")?;
            Some(rest.chars().take(6).collect())
        }
    }

    #[async_trait]
    impl EmailSender for MockEmailSender {
        async fn send(
            &self,
            to_email: &str,
            _subject: &str,
            text: &str,
            _html: &str,
        ) -> Result<(), String> {
            if self.fail {
                return Err("provider rejected the message".to_string());
            }
            let mut sent = self.sent.lock().await;
            sent.push((to_email.to_string(), text.to_string()));
            Ok(())
        }
    }
}

/// Client for the Mailtrap Email Sending API.
pub struct MailtrapClient {
    http: reqwest::Client,
    token: String,
    from_email: String,
    from_name: String,
}

impl MailtrapClient {
    pub fn new(config: &AppConfig) -> Self {
        MailtrapClient {
            http: reqwest::Client::new(),
            token: config.mailtrap_token.clone(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        }
    }
}

#[async_trait]
impl EmailSender for MailtrapClient {
    async fn send(
        &self,
        to_email: &str,
        subject: &str,
        text: &str,
        html: &str,
    ) -> Result<(), String> {
        let payload = json!({
            "from": { "name": self.from_name, "email": self.from_email },
            "to": [{ "email": to_email }],
            "subject": subject,
            "text": text,
            "html": html,
            "category": "verification_code",
        });

        let response = self
            .http
            .post(MAILTRAP_SEND_URL)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Mailtrap request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Mailtrap send error".to_string());
            return Err(format!("Mailtrap returned {}: {}", status, detail));
        }

        info!("[Mailtrap] send response: {}", status);
        Ok(())
    }
}
