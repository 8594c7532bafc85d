pub mod certificates;
pub mod common;
pub mod group_soal;
pub mod guru;
pub mod kelas;
pub mod modul;
pub mod nilai;
pub mod siswa;
pub mod system;
pub mod users;

pub use common::{ApiResponse, ListParams, ListResponse, PaginationInfo};
pub use system::AppStartTime;

use crate::errors::GreenSysError;

/// 网关响应中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    Unauthorized = 1001,
    SessionExpired = 1002,
    NotFound = 1004,
    ValidationFailed = 1022,
    Cancelled = 1099,
    InternalServerError = 1500,
    UpstreamUnavailable = 1502,
    UpstreamError = 1503,
    StatsJoinFailed = 1504,
}

impl From<&GreenSysError> for ErrorCode {
    fn from(err: &GreenSysError) -> Self {
        match err {
            GreenSysError::SessionExpired(_) => ErrorCode::SessionExpired,
            GreenSysError::NotFound(_) => ErrorCode::NotFound,
            GreenSysError::Validation(_) => ErrorCode::ValidationFailed,
            GreenSysError::Network(_) => ErrorCode::UpstreamUnavailable,
            GreenSysError::ServerFault(_)
            | GreenSysError::UpstreamStatus(_)
            | GreenSysError::Serialization(_) => ErrorCode::UpstreamError,
            GreenSysError::JoinFailed(_) => ErrorCode::StatsJoinFailed,
            GreenSysError::Cancelled(_) => ErrorCode::Cancelled,
            GreenSysError::Configuration(_) | GreenSysError::FileOperation(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}
