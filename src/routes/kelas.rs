use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::models::kelas::requests::KelasRequest;
use crate::services::KelasService;
use crate::session::Session;
use crate::utils::SafeId;

// 懒加载的全局 KelasService 实例
static KELAS_SERVICE: Lazy<KelasService> = Lazy::new(KelasService::new_lazy);

// HTTP处理程序
pub async fn list_kelas(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    KELAS_SERVICE
        .list_kelas(session, query.into_inner(), &req)
        .await
}

pub async fn kelas_stats(req: HttpRequest, session: Session) -> ActixResult<HttpResponse> {
    KELAS_SERVICE.kelas_stats(session, &req).await
}

pub async fn get_kelas(
    req: HttpRequest,
    session: Session,
    kelas_id: SafeId,
) -> ActixResult<HttpResponse> {
    KELAS_SERVICE.get_kelas(session, kelas_id.as_str(), &req).await
}

pub async fn create_kelas(
    req: HttpRequest,
    session: Session,
    kelas_data: web::Json<KelasRequest>,
) -> ActixResult<HttpResponse> {
    KELAS_SERVICE
        .create_kelas(session, kelas_data.into_inner(), &req)
        .await
}

pub async fn update_kelas(
    req: HttpRequest,
    session: Session,
    kelas_id: SafeId,
    kelas_data: web::Json<KelasRequest>,
) -> ActixResult<HttpResponse> {
    KELAS_SERVICE
        .update_kelas(session, kelas_id.as_str(), kelas_data.into_inner(), &req)
        .await
}

pub async fn delete_kelas(
    req: HttpRequest,
    session: Session,
    kelas_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    KELAS_SERVICE
        .delete_kelas(session, kelas_id.as_str(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_kelas_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/kelas")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_kelas))
            .route("", web::post().to(create_kelas))
            .route("/stats", web::get().to(kelas_stats))
            .route("/{id}", web::get().to(get_kelas))
            .route("/{id}", web::patch().to(update_kelas))
            .route("/{id}", web::delete().to(delete_kelas)),
    );
}
