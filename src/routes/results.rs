use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::services::ResultService;
use crate::session::Session;
use crate::utils::SafeId;

// 懒加载的全局 ResultService 实例
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn list_all_results(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .list_all_results(session, query.into_inner(), &req)
        .await
}

pub async fn list_student_results(
    req: HttpRequest,
    session: Session,
    siswa_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .list_student_results(session, siswa_id.as_str(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_all_results))
            .route("/student/{id}", web::get().to(list_student_results)),
    );
}
