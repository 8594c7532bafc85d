use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::backend::Resource;
use crate::dataflow::FetchFallback;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::certificates::entities::Certificate;
use crate::services::common::{list_response, respond};
use crate::session::Session;

pub async fn list_certificates(
    service: &CertificateService,
    session: Session,
    params: ListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(list(service, session, params, request).await)
}

async fn list(
    service: &CertificateService,
    session: Session,
    params: ListParams,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    list_response::<Certificate>(
        backend,
        session,
        Resource::Certificate.path(),
        params,
        FetchFallback::Empty,
    )
    .await
}
