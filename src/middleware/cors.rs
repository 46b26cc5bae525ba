use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Build the CORS layer for the configured frontend origin.
///
/// `FRONTEND_ORIGIN=*` selects the permissive variant used behind
/// function-style deployments (any origin, POST/OPTIONS, Content-Type only).
/// Anything else is treated as the single allowed origin of the hosted
/// server variant.
pub fn create_cors(frontend_origin: &str) -> Cors {
    if frontend_origin == "*" {
        Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allowed_methods(vec![Method::POST, Method::OPTIONS])
            .allowed_headers(vec![header::CONTENT_TYPE])
    } else {
        Cors::default()
            .allowed_origin(frontend_origin)
            .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
    }
}
