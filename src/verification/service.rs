use crate::utils::email::{EmailSender, VerificationEmail};
use crate::utils::error::CustomError;
use crate::utils::helpers::{CODE_EXPIRATION_MINUTES, generate_code, looks_like_email};
use crate::verification::model::VerificationRecord;
use chrono::{DateTime, Duration, Utc};
use log::error;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Issues and checks one-time verification codes against an in-memory store.
///
/// The store maps normalized (trimmed, lower-cased) emails to at most one
/// pending record each. Records are replaced on re-issue and removed on
/// successful verification; expired records are left in place and simply
/// never verify. The mutex serializes the read-modify-write in both paths so
/// concurrent requests for the same email cannot lose updates.
pub struct VerificationService {
    sender: Arc<dyn EmailSender>,
    codes: Mutex<HashMap<String, VerificationRecord>>,
}

impl VerificationService {
    pub fn new(sender: Arc<dyn EmailSender>) -> Self {
        VerificationService {
            sender,
            codes: Mutex::new(HashMap::new()),
        }
    }

    /// Generate and store a fresh code for the email, then dispatch it.
    ///
    /// The record is written before the send and is not rolled back if the
    /// send fails; the caller gets `DeliveryFailed` while the code stays
    /// pending. Issuance and delivery are not transactional.
    pub async fn issue_code(&self, email: &str) -> Result<(), CustomError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CustomError::InvalidInput("Email is required".to_string()));
        }
        if !looks_like_email(email) {
            return Err(CustomError::InvalidInput(
                "Invalid email format".to_string(),
            ));
        }
        let email = email.to_lowercase();

        let code = generate_code();
        {
            let mut codes = self.codes.lock().await;
            codes.insert(
                email.clone(),
                VerificationRecord {
                    code: code.clone(),
                    issued_at: Utc::now(),
                },
            );
        }

        let message = VerificationEmail::for_code(&code);
        self.sender
            .send(&email, &message.subject, &message.text, &message.html)
            .await
            .map_err(|detail| {
                error!("Error sending email: {}", detail);
                CustomError::DeliveryFailed(detail)
            })?;

        Ok(())
    }

    /// Check a candidate code; a match within the expiry window consumes the
    /// record, so a second attempt with the same code fails.
    pub async fn verify_code(&self, email: &str, candidate: &str) -> bool {
        self.verify_code_at(email, candidate, Utc::now()).await
    }

    async fn verify_code_at(&self, email: &str, candidate: &str, now: DateTime<Utc>) -> bool {
        let email = email.trim().to_lowercase();
        let candidate = candidate.trim();

        let mut codes = self.codes.lock().await;
        let valid = codes.get(&email).is_some_and(|record| {
            record.code == candidate
                && now - record.issued_at < Duration::minutes(CODE_EXPIRATION_MINUTES)
        });
        if valid {
            // One-time use
            codes.remove(&email);
        }
        valid
    }

    #[cfg(test)]
    async fn stored_code(&self, email: &str) -> Option<String> {
        let codes = self.codes.lock().await;
        codes.get(email).map(|record| record.code.clone())
    }

    #[cfg(test)]
    async fn backdate(&self, email: &str, issued_at: DateTime<Utc>) {
        let mut codes = self.codes.lock().await;
        if let Some(record) = codes.get_mut(email) {
            record.issued_at = issued_at;
        }
    }
}
