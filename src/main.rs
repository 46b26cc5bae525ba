use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use chrono::{SecondsFormat, Utc};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use serde_json::json;
use std::sync::Arc;

mod middleware;
mod router;
mod utils;
mod verification;

use middleware::cors::create_cors;
use middleware::not_found::not_found;
use router::index::routes;
use utils::config::AppConfig;
use utils::email::MailtrapClient;
use verification::service::VerificationService;

#[get("/")]
async fn default(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().body(format!(
        "✅ Email Verification Server is running on http://localhost:{}",
        config.port
    ))
}

#[get("/health")]
async fn health(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": config.service_name,
        "port": config.port,
        "time": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let port = config.port;

    info!("Starting server on http://localhost:{}", port);

    let sender = Arc::new(MailtrapClient::new(&config));
    let service = web::Data::new(VerificationService::new(sender));
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors(&config.frontend_origin))
            .app_data(service.clone())
            .app_data(config.clone())
            .configure(routes)
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
            .service(default)
            .service(health)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use serde_json::Value;

    fn test_config() -> AppConfig {
        AppConfig {
            mailtrap_token: "test-token".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "EasyEyes Support".to_string(),
            frontend_origin: "http://localhost:3000".to_string(),
            port: 30001,
            service_name: "EmailVerificationServer".to_string(),
        }
    }

    #[actix_web::test]
    async fn health_reports_status_service_port_and_time() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .service(health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "EmailVerificationServer");
        assert_eq!(body["port"], 30001);
        assert!(body["time"].as_str().unwrap().ends_with('Z'));
    }

    #[actix_web::test]
    async fn root_returns_running_banner() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .service(default),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("✅ Email Verification Server is running"));
        assert!(text.ends_with(":30001"));
    }
}
