use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::backend::Resource;
use crate::dataflow::CollectionFetcher;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::users::entities::User;
use crate::services::common::respond;
use crate::session::Session;

pub async fn get_user(
    service: &UserService,
    session: Session,
    uuid: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(get(service, session, uuid, request).await)
}

async fn get(
    service: &UserService,
    session: Session,
    uuid: &str,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    // 编辑页需要的是单个用户；部分后端版本包了一层 data
    let user: User = CollectionFetcher::new(backend, session)
        .fetch_one(&Resource::Users.item_path(uuid), "uuid")
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User retrieved successfully")))
}
