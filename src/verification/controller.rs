use crate::utils::error::CustomError;
use crate::verification::model::{SendCodeRequest, VerifyCodeRequest};
use crate::verification::service::VerificationService;
use actix_web::{HttpResponse, Responder, web};

pub async fn send_code(
    service: web::Data<VerificationService>,
    body: web::Json<SendCodeRequest>,
) -> Result<HttpResponse, CustomError> {
    service.issue_code(&body.email).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Verification code sent"
    })))
}

pub async fn verify_code(
    service: web::Data<VerificationService>,
    body: web::Json<VerifyCodeRequest>,
) -> impl Responder {
    if service.verify_code(&body.email, &body.code).await {
        HttpResponse::Ok().json(serde_json::json!({ "verified": true }))
    } else {
        // Absent, mismatched and expired codes all get the same body so the
        // response never reveals whether an email has a pending code.
        HttpResponse::BadRequest().json(serde_json::json!({
            "verified": false,
            "message": "Invalid or expired code"
        }))
    }
}
