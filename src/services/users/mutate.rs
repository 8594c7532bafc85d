use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::backend::Resource;
use crate::dataflow::MutationDispatcher;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::users::entities::User;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::services::common::{
    created_response, delete_response, json_body, respond, updated_response,
};
use crate::session::Session;

pub async fn create_user(
    service: &UserService,
    session: Session,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(create(service, session, user_data, request).await)
}

async fn create(
    service: &UserService,
    session: Session,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    user_data.validate()?;
    let backend = service.get_backend(request)?;
    let created = MutationDispatcher::new(backend, session)
        .create(Resource::Users.path(), json_body(&user_data)?)
        .await?;
    Ok(created_response(created))
}

pub async fn update_user(
    service: &UserService,
    session: Session,
    uuid: &str,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(update(service, session, uuid, update_data, request).await)
}

async fn update(
    service: &UserService,
    session: Session,
    uuid: &str,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    update_data.validate()?;
    let update_data = update_data.without_blank_password();
    let backend = service.get_backend(request)?;
    let updated = MutationDispatcher::new(backend, session)
        .update(&Resource::Users.item_path(uuid), json_body(&update_data)?)
        .await?;
    Ok(updated_response(updated))
}

pub async fn delete_user(
    service: &UserService,
    session: Session,
    uuid: &str,
    params: ListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(delete(service, session, uuid, params, request).await)
}

async fn delete(
    service: &UserService,
    session: Session,
    uuid: &str,
    params: ListParams,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    delete_response::<User>(
        backend,
        session,
        &Resource::Users.item_path(uuid),
        Resource::Users.path(),
        params,
    )
    .await
}
