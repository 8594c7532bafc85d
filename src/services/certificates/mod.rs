pub mod download;
pub mod list;
pub mod mutate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::backend::{Backend, MutationBody};
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::certificates::requests::DownloadCertificateRequest;
use crate::session::Session;

pub struct CertificateService {
    backend: Option<Arc<dyn Backend>>,
}

impl CertificateService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    // 证书列表（获取失败时返回空列表与提示）
    pub async fn list_certificates(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_certificates(self, session, params, request).await
    }

    // 颁发证书（可附带 PDF）
    pub async fn create_certificate(
        &self,
        session: Session,
        body: MutationBody,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::create_certificate(self, session, body, request).await
    }

    // 删除证书
    pub async fn delete_certificate(
        &self,
        session: Session,
        certificate_id: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::delete_certificate(self, session, certificate_id, params, request).await
    }

    // 通过后端代理下载证书 PDF
    pub async fn download_certificate(
        &self,
        session: Session,
        download: DownloadCertificateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        download::download_certificate(self, session, download, request).await
    }
}
