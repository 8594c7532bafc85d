//! 会话
//!
//! 前端把登录令牌保存在本地，每个请求通过 `Authorization: Bearer <token>` 传给网关。
//! 网关只在一处解析令牌（[`crate::middlewares::RequireSession`]），之后以 [`Session`]
//! 的形式传给所有数据访问调用；令牌缺失或上游返回 401 都走
//! [`unauthenticated_response`] 这一统一出口。

use std::fmt;

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpMessage, HttpRequest, HttpResponse, dev::Payload};
use futures_util::future::{Ready, ready};
use serde::Serialize;
use ts_rs::TS;

use crate::config::AppConfig;
use crate::errors::MSG_SESSION_EXPIRED;
use crate::models::{ApiResponse, ErrorCode};

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// 从 Authorization 头解析，格式不符或令牌为空时返回 None
    pub fn from_authorization(header: &str) -> Option<Self> {
        header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Self::new)
    }

    pub fn from_http_request(req: &HttpRequest) -> Option<Self> {
        if let Some(session) = req.extensions().get::<Session>() {
            return Some(session.clone());
        }
        req.headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(Self::from_authorization)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// 日志中不输出令牌
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

// 会话失效时附带的跳转信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct UnauthenticatedData {
    pub redirect: String,
}

/// 统一的未认证响应：401 + 登录路由
pub fn unauthenticated_response(message: &str) -> HttpResponse {
    let redirect = AppConfig::get().session.login_route.clone();
    HttpResponse::Unauthorized().json(ApiResponse::error(
        ErrorCode::SessionExpired,
        UnauthenticatedData { redirect },
        message,
    ))
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Session::from_http_request(req).ok_or_else(|| {
            InternalError::from_response(
                "missing session",
                unauthenticated_response(MSG_SESSION_EXPIRED),
            )
            .into()
        }))
    }
}
