use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::KelasService;
use crate::backend::Resource;
use crate::dataflow::MutationDispatcher;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::kelas::entities::Kelas;
use crate::models::kelas::requests::KelasRequest;
use crate::services::common::{
    created_response, delete_response, json_body, respond, updated_response,
};
use crate::session::Session;

pub async fn create_kelas(
    service: &KelasService,
    session: Session,
    kelas: KelasRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(create(service, session, kelas, request).await)
}

async fn create(
    service: &KelasService,
    session: Session,
    kelas: KelasRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    kelas.validate_create()?;
    let backend = service.get_backend(request)?;
    let created = MutationDispatcher::new(backend, session)
        .create(Resource::Kelas.path(), json_body(&kelas)?)
        .await?;
    Ok(created_response(created))
}

pub async fn update_kelas(
    service: &KelasService,
    session: Session,
    kelas_id: &str,
    kelas: KelasRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(update(service, session, kelas_id, kelas, request).await)
}

async fn update(
    service: &KelasService,
    session: Session,
    kelas_id: &str,
    kelas: KelasRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    kelas.validate_update()?;
    let backend = service.get_backend(request)?;
    let updated = MutationDispatcher::new(backend, session)
        .update(&Resource::Kelas.item_path(kelas_id), json_body(&kelas)?)
        .await?;
    Ok(updated_response(updated))
}

pub async fn delete_kelas(
    service: &KelasService,
    session: Session,
    kelas_id: &str,
    params: ListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(delete(service, session, kelas_id, params, request).await)
}

async fn delete(
    service: &KelasService,
    session: Session,
    kelas_id: &str,
    params: ListParams,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    delete_response::<Kelas>(
        backend,
        session,
        &Resource::Kelas.item_path(kelas_id),
        Resource::Kelas.path(),
        params,
    )
    .await
}
