//! 各业务服务共用的响应构造

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use ts_rs::TS;

use crate::backend::{Backend, MutationBody};
use crate::config::AppConfig;
use crate::dataflow::{CollectionFetcher, FetchFallback, MutationDispatcher};
use crate::errors::{GreenSysError, Result};
use crate::listing::{ListControls, Listable, derive_view};
use crate::models::{ApiResponse, ListParams, ListResponse};
use crate::session::{Session, unauthenticated_response};

/// 优先使用注入的后端，否则从 app_data 获取
pub(crate) fn resolve_backend(
    injected: &Option<Arc<dyn Backend>>,
    request: &HttpRequest,
) -> Result<Arc<dyn Backend>> {
    if let Some(backend) = injected {
        return Ok(backend.clone());
    }
    request
        .app_data::<web::Data<Arc<dyn Backend>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| GreenSysError::configuration("Backend not found in app data"))
}

/// 错误统一出口；会话失效走未认证处理
pub(crate) fn error_response(err: &GreenSysError) -> HttpResponse {
    if err.is_session_expired() {
        return unauthenticated_response(&err.user_message());
    }
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
    HttpResponse::build(status).json(ApiResponse::from_error(err))
}

pub(crate) fn list_controls(params: ListParams) -> ListControls {
    params.into_controls(AppConfig::get().listing.page_size)
}

/// 由完整集合派生当前页
pub(crate) fn view_response<T>(items: &[T], controls: &ListControls) -> HttpResponse
where
    T: Listable + Serialize + TS + Clone,
{
    let view = derive_view(items, controls);
    HttpResponse::Ok().json(ApiResponse::success(
        ListResponse::from_view(view, controls),
        "Data retrieved successfully",
    ))
}

/// 统一出口：错误转换为信封响应
pub(crate) fn respond(result: Result<HttpResponse>) -> ActixResult<HttpResponse> {
    Ok(result.unwrap_or_else(|e| error_response(&e)))
}

/// 获取集合并返回列表视图
pub(crate) async fn list_response<T>(
    backend: Arc<dyn Backend>,
    session: Session,
    path: &str,
    params: ListParams,
    fallback: FetchFallback,
) -> Result<HttpResponse>
where
    T: Listable + DeserializeOwned + Serialize + TS + Clone,
{
    let controls = list_controls(params);
    controls.validate_for::<T>()?;

    match CollectionFetcher::new(backend, session).fetch::<T>(path).await {
        Ok(items) => Ok(view_response(&items, &controls)),
        Err(e) if fallback == FetchFallback::Empty && !e.is_session_expired() => {
            warn!("Serving empty view for {}: {}", path, e);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ListResponse::<T>::empty_with_warning(&controls, e.user_message()),
                "Data unavailable",
            )))
        }
        Err(e) => Err(e),
    }
}

/// 按 id 获取单条记录（编辑页回填）
pub(crate) async fn item_response<T>(
    backend: Arc<dyn Backend>,
    session: Session,
    item_path: &str,
    message: &str,
) -> Result<HttpResponse>
where
    T: DeserializeOwned + Serialize + TS,
{
    let record: T = CollectionFetcher::new(backend, session)
        .fetch_one(item_path, "id")
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record, message)))
}

/// 删除后返回刷新的列表视图
pub(crate) async fn delete_response<T>(
    backend: Arc<dyn Backend>,
    session: Session,
    item_path: &str,
    collection_path: &str,
    params: ListParams,
) -> Result<HttpResponse>
where
    T: Listable + DeserializeOwned + Serialize + TS + Clone,
{
    let controls = list_controls(params);
    controls.validate_for::<T>()?;

    let items = MutationDispatcher::new(backend, session)
        .delete_and_refetch::<T>(item_path, collection_path)
        .await?;
    let view = derive_view(&items, &controls);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ListResponse::from_view(view, &controls),
        "Deleted successfully",
    )))
}

pub(crate) fn created_response(record: Value) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::success(record, "Created successfully"))
}

pub(crate) fn updated_response(record: Value) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(record, "Updated successfully"))
}

/// 把已校验的请求结构体序列化为 JSON 请求体
pub(crate) fn json_body<T: Serialize>(request: &T) -> Result<MutationBody> {
    Ok(MutationBody::Json(serde_json::to_value(request)?))
}
