//! 上游 GreenSys 后端访问层
//!
//! 所有页面的数据都来自同一个 REST 后端。这里把它抽象为 [`Backend`] trait，
//! 生产环境使用基于 reqwest 的 [`rest::RestBackend`]，测试与离线演示使用
//! 进程内的 [`memory::MemoryBackend`]。

pub mod memory;
pub mod rest;

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::UpstreamConfig;
use crate::errors::{GreenSysError, Result};
use crate::session::Session;

pub use memory::MemoryBackend;
pub use rest::RestBackend;

/// 后端资源路径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Kelas,
    Siswa,
    Users,
    Guru,
    Certificate,
    AllResults,
    GroupSoal,
    Modul,
    ProfileSiswa,
    ProfileGuru,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Kelas => "/kelas",
            Resource::Siswa => "/siswa",
            Resource::Users => "/users",
            Resource::Guru => "/guru",
            Resource::Certificate => "/certificate",
            Resource::AllResults => "/all-results",
            Resource::GroupSoal => "/group-soal",
            Resource::Modul => "/modul",
            Resource::ProfileSiswa => "/profile-siswa",
            Resource::ProfileGuru => "/profile-guru",
        }
    }

    /// 单条记录路径，如 `/kelas/3`
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path(), id)
    }
}

/// 某个学生的测验成绩
pub fn student_results_path(siswa_id: &str) -> String {
    format!("/student-results/{siswa_id}")
}

/// 表单字段（multipart 转发用）
#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: value.into().into_bytes(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.file_name.is_some()
    }

    pub fn as_text(&self) -> Option<&str> {
        if self.is_file() {
            None
        } else {
            std::str::from_utf8(&self.data).ok()
        }
    }
}

/// 创建/更新请求体：JSON 或带附件的表单
#[derive(Debug, Clone, PartialEq)]
pub enum MutationBody {
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl MutationBody {
    /// 文本字段取值，供本地校验使用
    pub fn text_field(&self, name: &str) -> Option<String> {
        match self {
            MutationBody::Json(value) => match value.get(name)? {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            },
            MutationBody::Multipart(parts) => parts
                .iter()
                .find(|p| p.name == name)
                .and_then(|p| p.as_text())
                .map(str::to_string),
        }
    }
}

/// 二进制下载结果
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// 后端类型名称（用于日志与健康检查）
    fn kind(&self) -> &'static str;

    /// GET，返回原始 JSON
    async fn get(&self, session: &Session, path: &str) -> Result<Value>;
    /// POST 创建
    async fn create(&self, session: &Session, path: &str, body: MutationBody) -> Result<Value>;
    /// PATCH 更新
    async fn update(&self, session: &Session, path: &str, body: MutationBody) -> Result<Value>;
    /// DELETE
    async fn delete(&self, session: &Session, path: &str) -> Result<()>;
    /// 通过后端代理下载 PDF
    async fn download_pdf(&self, session: &Session, pdf_url: &str) -> Result<Download>;
}

/// 取出列表数据：接受裸数组或 `{ "data": [...] }` 包装
pub fn collection_items(raw: Value) -> Result<Vec<Value>> {
    match raw {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) => Ok(Vec::new()),
            _ => Err(GreenSysError::serialization(
                "Expected a JSON array or an object with a `data` array",
            )),
        },
        Value::Null => Ok(Vec::new()),
        _ => Err(GreenSysError::serialization("Expected a JSON array")),
    }
}

/// 取出单条记录：接受裸对象或 `{ "data": {...} }` 包装
///
/// `identity_key` 存在时视为裸对象，避免把名为 `data` 的业务字段误当作包装
pub fn single_record(raw: Value, identity_key: &str) -> Result<Value> {
    match raw {
        Value::Object(mut map) if !map.contains_key(identity_key) && map.contains_key("data") => {
            match map.remove("data") {
                Some(record @ Value::Object(_)) => Ok(record),
                Some(Value::Null) => Err(GreenSysError::not_found("Record envelope is empty")),
                _ => Err(GreenSysError::serialization(
                    "Expected an object in the `data` envelope",
                )),
            }
        }
        Value::Object(map) => Ok(Value::Object(map)),
        Value::Null => Err(GreenSysError::not_found("Record is null")),
        _ => Err(GreenSysError::serialization("Expected a JSON object")),
    }
}

/// 根据配置创建后端，配置的类型不可用时回退到内存后端
pub async fn create_backend(config: &UpstreamConfig) -> Result<Arc<dyn Backend>> {
    info!("Attempting to create {} upstream backend", config.kind);

    match config.kind.as_str() {
        "rest" => match RestBackend::new(config) {
            Ok(backend) => {
                info!("Successfully created rest backend for {}", config.base_url);
                return Ok(Arc::new(backend));
            }
            Err(e) => {
                warn!("Failed to create rest backend: {}", e);
                warn!("Falling back to memory backend");
            }
        },
        "memory" => {}
        other => {
            warn!("Upstream backend '{}' is not supported", other);
            warn!("Falling back to memory backend");
        }
    }

    let backend = if config.fixture_path.is_empty() {
        MemoryBackend::new()
    } else {
        MemoryBackend::from_fixture_file(&config.fixture_path)?
    };
    info!("Memory backend initialized");
    Ok(Arc::new(backend))
}
