use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::KelasService;
use crate::backend::Resource;
use crate::dataflow::FetchFallback;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::kelas::entities::Kelas;
use crate::services::common::{list_response, respond};
use crate::session::Session;

pub async fn list_kelas(
    service: &KelasService,
    session: Session,
    params: ListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(list(service, session, params, request).await)
}

async fn list(
    service: &KelasService,
    session: Session,
    params: ListParams,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    let backend = service.get_backend(request)?;
    list_response::<Kelas>(
        backend,
        session,
        Resource::Kelas.path(),
        params,
        FetchFallback::Propagate,
    )
    .await
}
