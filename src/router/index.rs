use crate::verification::index::verification_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(verification_routes);
}
