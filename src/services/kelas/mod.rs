pub mod get;
pub mod list;
pub mod mutate;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::backend::Backend;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::kelas::requests::KelasRequest;
use crate::session::Session;

pub struct KelasService {
    backend: Option<Arc<dyn Backend>>,
}

impl KelasService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    // 班级列表
    pub async fn list_kelas(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_kelas(self, session, params, request).await
    }

    // 单个班级
    pub async fn get_kelas(
        &self,
        session: Session,
        kelas_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_kelas(self, session, kelas_id, request).await
    }

    // 班级学生统计
    pub async fn kelas_stats(
        &self,
        session: Session,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        stats::kelas_stats(self, session, request).await
    }

    // 创建班级
    pub async fn create_kelas(
        &self,
        session: Session,
        kelas: KelasRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::create_kelas(self, session, kelas, request).await
    }

    // 更新班级
    pub async fn update_kelas(
        &self,
        session: Session,
        kelas_id: &str,
        kelas: KelasRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::update_kelas(self, session, kelas_id, kelas, request).await
    }

    // 删除班级，返回刷新后的列表
    pub async fn delete_kelas(
        &self,
        session: Session,
        kelas_id: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::delete_kelas(self, session, kelas_id, params, request).await
    }
}
