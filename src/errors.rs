//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称、HTTP 状态码与面向用户的提示语。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_greensys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum GreenSysError {
            $($variant(String),)*
        }

        impl GreenSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GreenSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GreenSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取网关对外返回的 HTTP 状态码
            pub fn status_code(&self) -> u16 {
                match self {
                    $(GreenSysError::$variant(_) => $status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GreenSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GreenSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GreenSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_greensys_errors! {
    Configuration("E001", "Configuration Error", 500),
    Network("E002", "Network Error", 502),
    SessionExpired("E003", "Session Expired", 401),
    NotFound("E004", "Resource Not Found", 404),
    Validation("E005", "Validation Error", 422),
    ServerFault("E006", "Upstream Server Error", 502),
    UpstreamStatus("E007", "Upstream Request Failed", 502),
    Serialization("E008", "Serialization Error", 502),
    Cancelled("E009", "Request Cancelled", 499),
    JoinFailed("E010", "Join Failed", 502),
    FileOperation("E011", "File Operation Error", 500),
}

pub const MSG_SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
pub const MSG_NOT_FOUND: &str = "The requested data was not found.";
pub const MSG_VALIDATION_FALLBACK: &str = "The submitted data is invalid.";
pub const MSG_SERVER_FAULT: &str = "A server error occurred. Please try again later.";
pub const MSG_NETWORK: &str = "Unable to reach the server. Please check your connection.";
pub const MSG_REQUEST_FAILED: &str = "The request could not be completed.";

impl GreenSysError {
    /// 面向用户的提示语
    ///
    /// 校验错误直接使用服务端给出的说明，其余类型使用固定文案。
    pub fn user_message(&self) -> String {
        match self {
            GreenSysError::SessionExpired(_) => MSG_SESSION_EXPIRED.to_string(),
            GreenSysError::NotFound(_) => MSG_NOT_FOUND.to_string(),
            GreenSysError::Validation(msg) if !msg.trim().is_empty() => msg.clone(),
            GreenSysError::Validation(_) => MSG_VALIDATION_FALLBACK.to_string(),
            GreenSysError::ServerFault(_) => MSG_SERVER_FAULT.to_string(),
            GreenSysError::Network(_) => MSG_NETWORK.to_string(),
            GreenSysError::JoinFailed(msg) => msg.clone(),
            _ => MSG_REQUEST_FAILED.to_string(),
        }
    }

    /// 是否为会话失效（需要跳转登录）
    pub fn is_session_expired(&self) -> bool {
        matches!(self, GreenSysError::SessionExpired(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GreenSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GreenSysError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for GreenSysError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GreenSysError::Serialization(err.to_string())
        } else {
            GreenSysError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for GreenSysError {
    fn from(err: std::io::Error) -> Self {
        GreenSysError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GreenSysError {
    fn from(err: serde_json::Error) -> Self {
        GreenSysError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GreenSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GreenSysError::configuration("test").code(), "E001");
        assert_eq!(GreenSysError::session_expired("test").code(), "E003");
        assert_eq!(GreenSysError::validation("test").code(), "E005");
        assert_eq!(GreenSysError::join_failed("test").code(), "E010");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(GreenSysError::session_expired("x").status_code(), 401);
        assert_eq!(GreenSysError::not_found("x").status_code(), 404);
        assert_eq!(GreenSysError::validation("x").status_code(), 422);
        assert_eq!(GreenSysError::network("x").status_code(), 502);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            GreenSysError::session_expired("401").user_message(),
            MSG_SESSION_EXPIRED
        );
        assert_eq!(GreenSysError::not_found("gone").user_message(), MSG_NOT_FOUND);
        assert_eq!(
            GreenSysError::validation("NIS sudah terdaftar").user_message(),
            "NIS sudah terdaftar"
        );
        assert_eq!(
            GreenSysError::validation("  ").user_message(),
            MSG_VALIDATION_FALLBACK
        );
        assert_eq!(GreenSysError::server_fault("boom").user_message(), MSG_SERVER_FAULT);
        assert_eq!(GreenSysError::network("refused").user_message(), MSG_NETWORK);
        assert_eq!(
            GreenSysError::upstream_status("418").user_message(),
            MSG_REQUEST_FAILED
        );
    }

    #[test]
    fn test_format_simple() {
        let err = GreenSysError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
