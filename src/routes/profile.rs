use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::common::error_response;
use crate::services::{ProfileKind, ProfileService};
use crate::session::Session;
use crate::utils::read_mutation_body;

// 懒加载的全局 ProfileService 实例
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

pub async fn get_siswa_profile(req: HttpRequest, session: Session) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .get_profile(session, ProfileKind::Siswa, &req)
        .await
}

pub async fn get_guru_profile(req: HttpRequest, session: Session) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .get_profile(session, ProfileKind::Guru, &req)
        .await
}

async fn update_profile(
    req: HttpRequest,
    session: Session,
    payload: web::Payload,
    kind: ProfileKind,
) -> ActixResult<HttpResponse> {
    match read_mutation_body(&req, payload).await {
        Ok(body) => PROFILE_SERVICE.update_profile(session, kind, body, &req).await,
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn update_siswa_profile(
    req: HttpRequest,
    session: Session,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    update_profile(req, session, payload, ProfileKind::Siswa).await
}

pub async fn update_guru_profile(
    req: HttpRequest,
    session: Session,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    update_profile(req, session, payload, ProfileKind::Guru).await
}

// 配置路由
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/profile")
            .wrap(middlewares::RequireSession)
            .route("/siswa", web::get().to(get_siswa_profile))
            .route("/siswa", web::patch().to(update_siswa_profile))
            .route("/guru", web::get().to(get_guru_profile))
            .route("/guru", web::patch().to(update_guru_profile)),
    );
}
