use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::backend::{MutationBody, Resource};
use crate::dataflow::MutationDispatcher;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::certificates::entities::Certificate;
use crate::services::common::{created_response, delete_response, respond};
use crate::session::Session;

pub async fn create_certificate(
    service: &CertificateService,
    session: Session,
    body: MutationBody,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(create(service, session, body, request).await)
}

async fn create(
    service: &CertificateService,
    session: Session,
    body: MutationBody,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    let created = MutationDispatcher::new(backend, session)
        .create(Resource::Certificate.path(), body)
        .await?;
    Ok(created_response(created))
}

pub async fn delete_certificate(
    service: &CertificateService,
    session: Session,
    certificate_id: &str,
    params: ListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(delete(service, session, certificate_id, params, request).await)
}

async fn delete(
    service: &CertificateService,
    session: Session,
    certificate_id: &str,
    params: ListParams,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    delete_response::<Certificate>(
        backend,
        session,
        &Resource::Certificate.item_path(certificate_id),
        Resource::Certificate.path(),
        params,
    )
    .await
}
