use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{
    created_response, delete_response, item_response, json_body, list_response, respond,
    updated_response,
};
use crate::backend::{Backend, Resource};
use crate::dataflow::{FetchFallback, MutationDispatcher};
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::group_soal::entities::GroupSoal;
use crate::models::group_soal::requests::GroupSoalRequest;
use crate::session::Session;

/// 测验组（限时，分配给班级）
pub struct GroupSoalService {
    backend: Option<Arc<dyn Backend>>,
}

impl GroupSoalService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    pub async fn list_group_soal(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                list_response::<GroupSoal>(
                    backend,
                    session,
                    Resource::GroupSoal.path(),
                    params,
                    FetchFallback::Propagate,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn get_group_soal(
        &self,
        session: Session,
        group_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                item_response::<GroupSoal>(
                    backend,
                    session,
                    &Resource::GroupSoal.item_path(group_id),
                    "Group soal retrieved successfully",
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }

    pub async fn create_group_soal(
        &self,
        session: Session,
        group: GroupSoalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond(self.create(session, group, request).await)
    }

    async fn create(
        &self,
        session: Session,
        group: GroupSoalRequest,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        group.validate_create()?;
        let backend = self.get_backend(request)?;
        let created = MutationDispatcher::new(backend, session)
            .create(Resource::GroupSoal.path(), json_body(&group)?)
            .await?;
        Ok(created_response(created))
    }

    pub async fn update_group_soal(
        &self,
        session: Session,
        group_id: &str,
        group: GroupSoalRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        respond(self.update(session, group_id, group, request).await)
    }

    async fn update(
        &self,
        session: Session,
        group_id: &str,
        group: GroupSoalRequest,
        request: &HttpRequest,
    ) -> Result<HttpResponse> {
        group.validate_update()?;
        let backend = self.get_backend(request)?;
        let updated = MutationDispatcher::new(backend, session)
            .update(&Resource::GroupSoal.item_path(group_id), json_body(&group)?)
            .await?;
        Ok(updated_response(updated))
    }

    pub async fn delete_group_soal(
        &self,
        session: Session,
        group_id: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let result = match self.get_backend(request) {
            Ok(backend) => {
                delete_response::<GroupSoal>(
                    backend,
                    session,
                    &Resource::GroupSoal.item_path(group_id),
                    Resource::GroupSoal.path(),
                    params,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result)
    }
}
