use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{respond, updated_response};
use crate::backend::{Backend, MutationBody, Resource};
use crate::dataflow::{CollectionFetcher, MutationDispatcher};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::session::Session;

/// 资料页类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Siswa,
    Guru,
}

impl ProfileKind {
    fn resource(&self) -> Resource {
        match self {
            ProfileKind::Siswa => Resource::ProfileSiswa,
            ProfileKind::Guru => Resource::ProfileGuru,
        }
    }
}

/// 个人资料，原样透传后端返回的 JSON
pub struct ProfileService {
    backend: Option<Arc<dyn Backend>>,
}

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    pub async fn get_profile(
        &self,
        session: Session,
        kind: ProfileKind,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond(self.get(session, kind, request).await)
    }

    async fn get(
        &self,
        session: Session,
        kind: ProfileKind,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        let backend = self.get_backend(request)?;
        let profile = CollectionFetcher::new(backend, session)
            .fetch_raw(kind.resource().path())
            .await?;
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            profile,
            "Profile retrieved successfully",
        )))
    }

    pub async fn update_profile(
        &self,
        session: Session,
        kind: ProfileKind,
        body: MutationBody,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => MutationDispatcher::new(backend, session)
                .update(kind.resource().path(), body)
                .await
                .map(updated_response),
            Err(e) => Err(e),
        };
        respond(result)
    }
}
