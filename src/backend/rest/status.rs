use serde_json::Value;

use crate::errors::GreenSysError;

/// 上游错误响应中可能携带说明的字段
const MESSAGE_FIELDS: [&str; 3] = ["msg", "message", "error"];

/// 把上游的非 2xx 状态映射为网关错误
///
/// 401 会话失效，404 未找到，400/422 校验失败（带后端说明），5xx 服务端故障，
/// 其余状态统一视为请求失败。
pub fn map_status(status: u16, body: &str) -> GreenSysError {
    let detail = payload_message(body);
    match status {
        401 => GreenSysError::session_expired(detail.unwrap_or_else(|| "HTTP 401".into())),
        404 => GreenSysError::not_found(detail.unwrap_or_else(|| "HTTP 404".into())),
        400 | 422 => GreenSysError::validation(detail.unwrap_or_default()),
        500..=599 => GreenSysError::server_fault(format!(
            "HTTP {status}: {}",
            detail.unwrap_or_default()
        )),
        _ => GreenSysError::upstream_status(format!(
            "HTTP {status}: {}",
            detail.unwrap_or_default()
        )),
    }
}

/// 从错误响应体中取说明文字
pub fn payload_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    MESSAGE_FIELDS.iter().find_map(|field| match value.get(field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        // express-validator 风格：[{ msg: "..." }]
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .next()
            .map(str::to_string),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{MSG_NOT_FOUND, MSG_SERVER_FAULT, MSG_SESSION_EXPIRED};

    #[test]
    fn test_status_taxonomy() {
        assert!(map_status(401, "").is_session_expired());
        assert_eq!(map_status(401, "").user_message(), MSG_SESSION_EXPIRED);
        assert_eq!(map_status(404, "{}").user_message(), MSG_NOT_FOUND);
        assert_eq!(map_status(500, "<html>").user_message(), MSG_SERVER_FAULT);
        assert_eq!(map_status(503, "").user_message(), MSG_SERVER_FAULT);
        assert!(matches!(map_status(409, ""), GreenSysError::UpstreamStatus(_)));
    }

    #[test]
    fn test_validation_message_comes_from_payload() {
        let err = map_status(422, r#"{"msg": "NIS sudah terdaftar"}"#);
        assert_eq!(err.user_message(), "NIS sudah terdaftar");

        let err = map_status(422, r#"{"message": "Email tidak valid"}"#);
        assert_eq!(err.user_message(), "Email tidak valid");

        let err = map_status(400, r#"{"error": [{"msg": "Username wajib diisi"}]}"#);
        assert_eq!(err.user_message(), "Username wajib diisi");
    }

    #[test]
    fn test_validation_without_message_uses_fallback() {
        let err = map_status(422, "not json");
        assert_eq!(err.user_message(), crate::errors::MSG_VALIDATION_FALLBACK);
    }
}
