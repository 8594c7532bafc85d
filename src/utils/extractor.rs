use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use futures_util::future::{Ready, ready};

use super::validate::is_valid_resource_id;
use crate::models::{ApiResponse, ErrorCode};

/// 路径参数 `{id}` 的安全提取器
///
/// 后端的主键既有自增整数也有 UUID，这里只限制字符集与长度，
/// 防止拼接到上游 URL 时出现路径穿越或查询注入。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeId(pub String);

impl SafeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid_id_error(raw: &str) -> actix_web::Error {
    InternalError::from_response(
        format!("invalid id: {raw}"),
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            "Invalid resource id",
        )),
    )
    .into()
}

impl FromRequest for SafeId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        if is_valid_resource_id(raw) {
            ready(Ok(SafeId(raw.to_string())))
        } else {
            ready(Err(invalid_id_error(raw)))
        }
    }
}
