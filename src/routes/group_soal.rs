use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::models::group_soal::requests::GroupSoalRequest;
use crate::services::GroupSoalService;
use crate::session::Session;
use crate::utils::SafeId;

// 懒加载的全局 GroupSoalService 实例
static GROUP_SOAL_SERVICE: Lazy<GroupSoalService> = Lazy::new(GroupSoalService::new_lazy);

pub async fn list_group_soal(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    GROUP_SOAL_SERVICE
        .list_group_soal(session, query.into_inner(), &req)
        .await
}

pub async fn get_group_soal(
    req: HttpRequest,
    session: Session,
    group_id: SafeId,
) -> ActixResult<HttpResponse> {
    GROUP_SOAL_SERVICE.get_group_soal(session, group_id.as_str(), &req).await
}

pub async fn create_group_soal(
    req: HttpRequest,
    session: Session,
    group_data: web::Json<GroupSoalRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SOAL_SERVICE
        .create_group_soal(session, group_data.into_inner(), &req)
        .await
}

pub async fn update_group_soal(
    req: HttpRequest,
    session: Session,
    group_id: SafeId,
    group_data: web::Json<GroupSoalRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SOAL_SERVICE
        .update_group_soal(session, group_id.as_str(), group_data.into_inner(), &req)
        .await
}

pub async fn delete_group_soal(
    req: HttpRequest,
    session: Session,
    group_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    GROUP_SOAL_SERVICE
        .delete_group_soal(session, group_id.as_str(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_group_soal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/group-soal")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_group_soal))
            .route("", web::post().to(create_group_soal))
            .route("/{id}", web::get().to(get_group_soal))
            .route("/{id}", web::patch().to(update_group_soal))
            .route("/{id}", web::delete().to(delete_group_soal)),
    );
}
