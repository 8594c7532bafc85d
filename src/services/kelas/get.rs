use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::KelasService;
use crate::backend::Resource;
use crate::models::kelas::entities::Kelas;
use crate::services::common::{item_response, respond};
use crate::session::Session;

pub async fn get_kelas(
    service: &KelasService,
    session: Session,
    kelas_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let result = match service.get_backend(request) {
        Ok(backend) => {
            item_response::<Kelas>(
                backend,
                session,
                &Resource::Kelas.item_path(kelas_id),
                "Kelas retrieved successfully",
            )
            .await
        }
        Err(e) => Err(e),
    };
    respond(result)
}
