use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{
    created_response, delete_response, item_response, list_response, respond, updated_response,
};
use crate::backend::{Backend, MutationBody, Resource};
use crate::dataflow::{FetchFallback, MutationDispatcher};
use crate::errors::{GreenSysError, Result};
use crate::models::ListParams;
use crate::models::modul::entities::Modul;
use crate::session::Session;

/// 学习模块；模块可附带文档或视频文件
pub struct ModulService {
    backend: Option<Arc<dyn Backend>>,
}

impl ModulService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    pub async fn list_modul(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                list_response::<Modul>(
                    backend,
                    session,
                    Resource::Modul.path(),
                    params,
                    FetchFallback::Propagate,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn get_modul(
        &self,
        session: Session,
        modul_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                item_response::<Modul>(
                    backend,
                    session,
                    &Resource::Modul.item_path(modul_id),
                    "Modul retrieved successfully",
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn create_modul(
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
        if body.text_field("judul").is_none_or(|j| j.trim().is_empty()) {
            return Err(GreenSysError::validation("Judul modul wajib diisi"));
        }
        let backend = self.get_backend(request)?;
        let created = MutationDispatcher::new(backend, session)
            .create(Resource::Modul.path(), body)
            .await?;
        Ok(created_response(created))
    }

    pub async fn update_modul(
        &self,
        session: Session,
        modul_id: &str,
        body: MutationBody,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => MutationDispatcher::new(backend, session)
                .update(&Resource::Modul.item_path(modul_id), body)
                .await
                .map(updated_response),
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn delete_modul(
        &self,
        session: Session,
        modul_id: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                delete_response::<Modul>(
                    backend,
                    session,
                    &Resource::Modul.item_path(modul_id),
                    Resource::Modul.path(),
                    params,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }
}
