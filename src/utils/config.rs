use crate::utils::helpers::looks_like_email;
use log::error;
use std::env;

/// Runtime configuration sourced from the environment.
///
/// Missing or malformed values are logged at startup but do not stop the
/// process; a send attempted without a usable credential fails at call time
/// instead.
#[derive(Clone)]
pub struct AppConfig {
    pub mailtrap_token: String,
    pub from_email: String,
    pub from_name: String,
    pub frontend_origin: String,
    pub port: u16,
    pub service_name: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mailtrap_token = env::var("MAILTRAP_TOKEN")
            .unwrap_or_default()
            .trim()
            .to_string();
        let from_email = env::var("EMAIL_FROM").unwrap_or_default().trim().to_string();

        if mailtrap_token.is_empty() {
            error!("[CONFIG] MAILTRAP_TOKEN is missing in .env");
        }
        if !looks_like_email(&from_email) {
            error!(
                "[CONFIG] EMAIL_FROM is invalid. Use a plain verified email, e.g. EMAIL_FROM=noreply@yourdomain.com"
            );
        }

        AppConfig {
            mailtrap_token,
            from_email,
            from_name: env::var("EMAIL_FROM_NAME")
                .unwrap_or_else(|_| "EasyEyes Support".to_string()),
            frontend_origin: env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "30001".to_string())
                .parse()
                .unwrap_or(30001),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "EmailVerificationServer".to_string()),
        }
    }
}
