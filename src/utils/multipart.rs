use actix_multipart::Multipart;
use actix_web::{HttpRequest, http::header::CONTENT_TYPE, web};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use tracing::debug;

use super::file_magic::{extension_of, validate_magic_bytes};
use crate::backend::{FormPart, MutationBody};
use crate::config::AppConfig;
use crate::errors::{GreenSysError, Result};

/// 读取变更请求体
///
/// `multipart/form-data`（带附件的表单）原样转为表单字段转发，
/// 其余按 JSON 解析；空请求体视为空对象。
pub async fn read_mutation_body(req: &HttpRequest, payload: web::Payload) -> Result<MutationBody> {
    let limit = AppConfig::get().server.limits.max_payload_size;
    if is_multipart(req) {
        let multipart = Multipart::new(req.headers(), payload);
        return collect_form_parts(multipart, limit)
            .await
            .map(MutationBody::Multipart);
    }

    let bytes = read_limited(payload, limit).await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(MutationBody::Json(serde_json::Value::Object(Default::default())));
    }
    serde_json::from_slice(&bytes)
        .map(MutationBody::Json)
        .map_err(|e| GreenSysError::validation(format!("Invalid JSON body: {e}")))
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"))
}

async fn read_limited(mut payload: web::Payload, limit: usize) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| GreenSysError::validation(format!("Invalid body: {e}")))?;
        if body.len() + chunk.len() > limit {
            return Err(GreenSysError::validation("Request body is too large"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// 收集所有表单字段，文件字段按扩展名校验魔术字节
pub async fn collect_form_parts(mut multipart: Multipart, limit: usize) -> Result<Vec<FormPart>> {
    let mut parts = Vec::new();
    let mut total_size: usize = 0;

    while let Some(mut field) = multipart
        .try_next()
        .await
        .map_err(|e| GreenSysError::validation(format!("Invalid multipart body: {e}")))?
    {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let file_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string());
        let content_type = field.content_type().map(|ct| ct.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| GreenSysError::validation(format!("Invalid multipart body: {e}")))?;
            total_size += chunk.len();
            if total_size > limit {
                return Err(GreenSysError::validation("Request body is too large"));
            }
            data.extend_from_slice(&chunk);
        }

        let part = FormPart {
            name,
            file_name,
            content_type,
            data,
        };
        check_file_part(&part)?;
        debug!(
            "Collected form field '{}' ({} bytes, file: {})",
            part.name,
            part.data.len(),
            part.is_file()
        );
        parts.push(part);
    }

    Ok(parts)
}

/// 文件字段的内容必须与扩展名一致
pub fn check_file_part(part: &FormPart) -> Result<()> {
    let Some(file_name) = part.file_name.as_deref() else {
        return Ok(());
    };
    // 浏览器在未选择文件时会提交空文件名与空内容
    if file_name.is_empty() && part.data.is_empty() {
        return Ok(());
    }
    let extension = extension_of(file_name).unwrap_or_default();
    if validate_magic_bytes(&part.data, &extension) {
        Ok(())
    } else {
        Err(GreenSysError::validation(format!(
            "File '{file_name}' does not match its extension or is not an allowed type"
        )))
    }
}
