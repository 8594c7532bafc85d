use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use super::common::respond;
use crate::backend::Backend;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::system::HealthResponse;
use crate::models::{ApiResponse, AppStartTime};

pub struct SystemService {
    backend: Option<Arc<dyn Backend>>,
}

impl SystemService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    // 存活检查，不访问上游
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        respond(self.build_health(request))
    }

    fn build_health(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let backend = self.get_backend(request)?;
        let started_at = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|t| t.start_datetime)
            .unwrap_or_else(chrono::Utc::now);
        let now = chrono::Utc::now();

        let health = HealthResponse {
            status: "ok".to_string(),
            system_name: self.get_config().app.system_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            upstream: backend.kind().to_string(),
            started_at,
            uptime_seconds: now.signed_duration_since(started_at).num_seconds(),
        };
        Ok(HttpResponse::Ok().json(ApiResponse::success(health, "Gateway is running")))
    }
}
