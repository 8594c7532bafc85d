use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::ListParams;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;
use crate::session::Session;
use crate::utils::SafeId;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn list_users(
    req: HttpRequest,
    session: Session,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .list_users(session, query.into_inner(), &req)
        .await
}

pub async fn create_user(
    req: HttpRequest,
    session: Session,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .create_user(session, user_data.into_inner(), &req)
        .await
}

pub async fn get_user(
    req: HttpRequest,
    session: Session,
    user_id: SafeId,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(session, user_id.as_str(), &req).await
}

pub async fn update_user(
    req: HttpRequest,
    session: Session,
    user_id: SafeId,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(session, user_id.as_str(), update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(
    req: HttpRequest,
    session: Session,
    user_id: SafeId,
    query: web::Query<ListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .delete_user(session, user_id.as_str(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireSession)
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::patch().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
