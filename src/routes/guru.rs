use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::services::GuruService;
use crate::services::common::error_response;
use crate::session::Session;
use crate::utils::{SafeId, read_mutation_body};

// 懒加载的全局 GuruService 实例
static GURU_SERVICE: Lazy<GuruService> = Lazy::new(GuruService::new_lazy);

pub async fn list_guru(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    GURU_SERVICE
        .list_guru(session, query.into_inner(), &req)
        .await
}

pub async fn get_guru(
    req: HttpRequest,
    session: Session,
    guru_id: SafeId,
) -> ActixResult<HttpResponse> {
    GURU_SERVICE.get_guru(session, guru_id.as_str(), &req).await
}

// 创建与更新接受 JSON 或带照片的 multipart 表单
pub async fn create_guru(
    req: HttpRequest,
    session: Session,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    match read_mutation_body(&req, payload).await {
        Ok(body) => GURU_SERVICE.create_guru(session, body, &req).await,
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn update_guru(
    req: HttpRequest,
    session: Session,
    guru_id: SafeId,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    match read_mutation_body(&req, payload).await {
        Ok(body) => {
            GURU_SERVICE
                .update_guru(session, guru_id.as_str(), body, &req)
                .await
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_guru(
    req: HttpRequest,
    session: Session,
    guru_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    GURU_SERVICE
        .delete_guru(session, guru_id.as_str(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_guru_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/guru")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_guru))
            .route("", web::post().to(create_guru))
            .route("/{id}", web::get().to(get_guru))
            .route("/{id}", web::patch().to(update_guru))
            .route("/{id}", web::delete().to(delete_guru)),
    );
}
