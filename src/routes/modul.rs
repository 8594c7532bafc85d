use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::services::ModulService;
use crate::services::common::error_response;
use crate::session::Session;
use crate::utils::{SafeId, read_mutation_body};

// 懒加载的全局 ModulService 实例
static MODUL_SERVICE: Lazy<ModulService> = Lazy::new(ModulService::new_lazy);

pub async fn list_modul(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    MODUL_SERVICE
        .list_modul(session, query.into_inner(), &req)
        .await
}

pub async fn create_modul(
    req: HttpRequest,
    session: Session,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    match read_mutation_body(&req, payload).await {
        Ok(body) => MODUL_SERVICE.create_modul(session, body, &req).await,
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_modul(
    req: HttpRequest,
    session: Session,
    modul_id: SafeId,
) -> ActixResult<HttpResponse> {
    MODUL_SERVICE.get_modul(session, modul_id.as_str(), &req).await
}

pub async fn update_modul(
    req: HttpRequest,
    session: Session,
    modul_id: SafeId,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    match read_mutation_body(&req, payload).await {
        Ok(body) => {
            MODUL_SERVICE
                .update_modul(session, modul_id.as_str(), body, &req)
                .await
        }
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_modul(
    req: HttpRequest,
    session: Session,
    modul_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    MODUL_SERVICE
        .delete_modul(session, modul_id.as_str(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_modul_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/modul")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_modul))
            .route("", web::post().to(create_modul))
            .route("/{id}", web::get().to(get_modul))
            .route("/{id}", web::patch().to(update_modul))
            .route("/{id}", web::delete().to(delete_modul)),
    );
}
