use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::models::certificates::requests::DownloadCertificateRequest;
use crate::services::CertificateService;
use crate::services::common::error_response;
use crate::session::Session;
use crate::utils::{SafeId, read_mutation_body};

// 懒加载的全局 CertificateService 实例
static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn list_certificates(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates(session, query.into_inner(), &req)
        .await
}

pub async fn create_certificate(
    req: HttpRequest,
    session: Session,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    match read_mutation_body(&req, payload).await {
        Ok(body) => {
            CERTIFICATE_SERVICE
                .create_certificate(session, body, &req)
                .await
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_certificate(
    req: HttpRequest,
    session: Session,
    certificate_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .delete_certificate(session, certificate_id.as_str(), query.into_inner(), &req)
        .await
}

pub async fn download_certificate(
    req: HttpRequest,
    session: Session,
    download: web::Json<DownloadCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .download_certificate(session, download.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_certificate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/certificates")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_certificates))
            .route("", web::post().to(create_certificate))
            .route("/download", web::post().to(download_certificate))
            .route("/{id}", web::delete().to(delete_certificate)),
    );
}
