use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{
    created_response, delete_response, item_response, list_response, respond, updated_response,
};
use crate::backend::{Backend, MutationBody, Resource};
use crate::dataflow::{FetchFallback, MutationDispatcher};
use crate::errors::{GreenSysError, Result};
use crate::models::ListParams;
use crate::models::guru::entities::Guru;
use crate::session::Session;

/// 教师管理；创建与更新可能携带照片，因此请求体为 JSON 或 multipart
pub struct GuruService {
    backend: Option<Arc<dyn Backend>>,
}

impl GuruService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    pub async fn list_guru(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                list_response::<Guru>(
                    backend,
                    session,
                    Resource::Guru.path(),
                    params,
                    FetchFallback::Propagate,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn get_guru(
        &self,
        session: Session,
        guru_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                item_response::<Guru>(
                    backend,
                    session,
                    &Resource::Guru.item_path(guru_id),
                    "Guru retrieved successfully",
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn create_guru(
        &self,
        session: Session,
        body: MutationBody,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond(self.create(session, body, request).await)
    }

    async fn create(
        &self,
        session: Session,
        body: MutationBody,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        if body.text_field("nama").is_none_or(|n| n.trim().is_empty()) {
            return Err(GreenSysError::validation("Nama guru wajib diisi"));
        }
        let backend = self.get_backend(request)?;
        let created = MutationDispatcher::new(backend, session)
            .create(Resource::Guru.path(), body)
            .await?;
        Ok(created_response(created))
    }

    pub async fn update_guru(
        &self,
        session: Session,
        guru_id: &str,
        body: MutationBody,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => MutationDispatcher::new(backend, session)
                .update(&Resource::Guru.item_path(guru_id), body)
                .await
                .map(updated_response),
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn delete_guru(
        &self,
        session: Session,
        guru_id: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                delete_response::<Guru>(
                    backend,
                    session,
                    &Resource::Guru.item_path(guru_id),
                    Resource::Guru.path(),
                    params,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }
}
