pub mod get;
pub mod list;
pub mod mutate;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::backend::Backend;
use crate::errors::Result;
use crate::models::ListParams;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::session::Session;

pub struct UserService {
    backend: Option<Arc<dyn Backend>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { backend: None }
    }

    pub(crate) fn get_backend(&self, request: &HttpRequest) -> Result<Arc<dyn Backend>> {
        super::common::resolve_backend(&self.backend, request)
    }

    // 获取用户列表
    pub async fn list_users(
        &self,
        session: Session,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, session, params, request).await
    }

    // 根据 UUID 获取用户
    pub async fn get_user(
        &self,
        session: Session,
        uuid: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_user(self, session, uuid, request).await
    }

    // 创建用户
    pub async fn create_user(
        &self,
        session: Session,
        user_data: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::create_user(self, session, user_data, request).await
    }

    // 更新用户信息
    pub async fn update_user(
        &self,
        session: Session,
        uuid: &str,
        update_data: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::update_user(self, session, uuid, update_data, request).await
    }

    // 删除用户
    pub async fn delete_user(
        &self,
        session: Session,
        uuid: &str,
        params: ListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mutate::delete_user(self, session, uuid, params, request).await
    }
}
