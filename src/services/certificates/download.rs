use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CertificateService;
use crate::errors::Result;
use crate::models::certificates::requests::DownloadCertificateRequest;
use crate::services::common::respond;
use crate::session::Session;
use crate::utils::file_magic::sniff_content_type;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn download_certificate(
    service: &CertificateService,
    session: Session,
    download: DownloadCertificateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    respond(proxy(service, session, download, request).await)
}

async fn proxy(
    service: &CertificateService,
    session: Session,
    download: DownloadCertificateRequest,
    request: &HttpRequest,
) -> Result<HttpResponse> {
    download.validate()?;
    let backend = service.get_backend(request)?;
    let file = backend.download_pdf(&session, &download.pdf_url).await?;

    let content_type = file
        .content_type
        .clone()
        .or_else(|| sniff_content_type(&file.bytes).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());
    let file_name = download.attachment_name();
    info!(
        "Proxied certificate download '{}' ({} bytes)",
        file_name,
        file.bytes.len()
    );

    Ok(HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, content_type))
        .insert_header((
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(file.bytes))
}
