use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::backend::Resource;
use crate::dataflow::FetchFallback;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::users::entities::User;
use crate::services::common::{list_response, respond};
use crate::session::Session;

pub async fn list_users(
    service: &UserService,
    session: Session,
    params: ListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(list(service, session, params, request).await)
}

async fn list(
    service: &UserService,
    session: Session,
    params: ListParams,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    list_response::<User>(
        backend,
        session,
        Resource::Users.path(),
        params,
        FetchFallback::Propagate,
    )
    .await
}
