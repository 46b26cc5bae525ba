use super::controller::{send_code, verify_code};
use actix_web::web;

pub fn verification_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/send-code", web::post().to(send_code))
        .route("/verify-code", web::post().to(verify_code));
}
