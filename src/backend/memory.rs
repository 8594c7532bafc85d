//! 进程内后端
//!
//! 按上游路径保存集合（如 `/kelas`）与单个文档（如 `/profile-siswa`），
//! 语义与 REST 后端一致：GET 列表/单条、POST 追加、PATCH 合并、DELETE 删除。
//! 用于集成测试与无后端时的离线演示，可通过 JSON 文件预置数据。

use std::path::Path;

use dashmap::{DashMap, DashSet};
use serde_json::{Map, Value};
use tracing::{debug, info};
use uuid::Uuid;

use super::{Backend, Download, MutationBody};
use crate::errors::{GreenSysError, Result};
use crate::session::Session;

const STUDENT_RESULTS_PREFIX: &str = "/student-results/";
const ALL_RESULTS_PATH: &str = "/all-results";
const UUID_KEYED_PATHS: [&str; 1] = ["/users"];
/// 注入 PDF 下载失败时使用的键
pub const PDF_PROXY_KEY: &str = "pdf-proxy";

#[derive(Default)]
pub struct MemoryBackend {
    collections: DashMap<String, Vec<Value>>,
    documents: DashMap<String, Value>,
    failures: DashMap<String, GreenSysError>,
    revoked_tokens: DashSet<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载：键为上游路径，数组为集合，对象为文档
    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let backend = Self::from_fixture(serde_json::from_str(&raw)?)?;
        info!("Loaded memory backend fixture from {}", path.display());
        Ok(backend)
    }

    pub fn from_fixture(fixture: Value) -> Result<Self> {
        let Value::Object(entries) = fixture else {
            return Err(GreenSysError::configuration(
                "Memory fixture must be a JSON object keyed by upstream path",
            ));
        };

        let backend = Self::new();
        for (path, value) in entries {
            match value {
                Value::Array(items) => backend.insert_collection(path, items),
                Value::Object(_) => backend.insert_document(path, value),
                _ => {
                    return Err(GreenSysError::configuration(format!(
                        "Fixture entry '{path}' must be an array or an object"
                    )));
                }
            }
        }
        Ok(backend)
    }

    pub fn insert_collection(&self, path: impl Into<String>, items: Vec<Value>) {
        self.collections.insert(path.into(), items);
    }

    pub fn insert_document(&self, path: impl Into<String>, document: Value) {
        self.documents.insert(path.into(), document);
    }

    /// 之后对该路径的所有调用都返回给定错误
    pub fn fail_path(&self, path: impl Into<String>, err: GreenSysError) {
        self.failures.insert(path.into(), err);
    }

    pub fn clear_failure(&self, path: &str) {
        self.failures.remove(path);
    }

    /// 之后携带该令牌的请求视为会话失效
    pub fn revoke_token(&self, token: impl Into<String>) {
        self.revoked_tokens.insert(token.into());
    }

    pub fn collection_len(&self, path: &str) -> usize {
        self.collections.get(path).map(|c| c.len()).unwrap_or(0)
    }

    fn check(&self, session: &Session, path: &str) -> Result<()> {
        if self.revoked_tokens.contains(session.token()) {
            return Err(GreenSysError::session_expired("token revoked"));
        }
        if let Some(err) = self.failures.get(path) {
            return Err(err.clone());
        }
        Ok(())
    }

    fn find_item(&self, collection: &str, id: &str) -> Option<Value> {
        self.collections
            .get(collection)?
            .iter()
            .find(|item| record_id(item).as_deref() == Some(id))
            .cloned()
    }

    fn student_results(&self, siswa_id: &str) -> Vec<Value> {
        self.collections
            .get(ALL_RESULTS_PATH)
            .map(|results| {
                results
                    .iter()
                    .filter(|r| {
                        r.pointer("/siswa/id")
                            .or_else(|| r.get("siswaId"))
                            .and_then(value_text)
                            .as_deref()
                            == Some(siswa_id)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// 记录主键：`id`（数字或字符串）或 `uuid`
fn record_id(item: &Value) -> Option<String> {
    item.get("id")
        .and_then(value_text)
        .or_else(|| item.get("uuid").and_then(value_text))
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `/kelas/3` -> (`/kelas`, `3`)
fn split_item_path(path: &str) -> Option<(&str, &str)> {
    let (collection, id) = path.rsplit_once('/')?;
    (!collection.is_empty() && !id.is_empty()).then_some((collection, id))
}

fn body_fields(body: MutationBody) -> Result<Map<String, Value>> {
    match body {
        MutationBody::Json(Value::Object(map)) => Ok(map),
        MutationBody::Json(_) => Err(GreenSysError::validation("Request body must be an object")),
        MutationBody::Multipart(parts) => Ok(parts
            .into_iter()
            .map(|part| {
                let value = match &part.file_name {
                    Some(file_name) => format!("memory://{file_name}"),
                    None => String::from_utf8_lossy(&part.data).into_owned(),
                };
                (part.name, Value::String(value))
            })
            .collect()),
    }
}

fn next_numeric_id(items: &[Value]) -> i64 {
    items
        .iter()
        .filter_map(|item| record_id(item)?.parse::<i64>().ok())
        .max()
        .unwrap_or(0)
        + 1
}

fn merge_into(target: &mut Value, fields: Map<String, Value>) {
    if let Value::Object(map) = target {
        for (key, value) in fields {
            // 主键不允许修改
            if key != "id" && key != "uuid" {
                map.insert(key, value);
            }
        }
    }
}

#[async_trait::async_trait]
impl Backend for MemoryBackend {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, session: &Session, path: &str) -> Result<Value> {
        self.check(session, path)?;

        if let Some(siswa_id) = path.strip_prefix(STUDENT_RESULTS_PREFIX) {
            return Ok(Value::Array(self.student_results(siswa_id)));
        }
        if let Some(items) = self.collections.get(path) {
            return Ok(Value::Array(items.clone()));
        }
        if let Some(document) = self.documents.get(path) {
            return Ok(document.clone());
        }
        split_item_path(path)
            .and_then(|(collection, id)| self.find_item(collection, id))
            .ok_or_else(|| GreenSysError::not_found(format!("GET {path}")))
    }

    async fn create(&self, session: &Session, path: &str, body: MutationBody) -> Result<Value> {
        self.check(session, path)?;
        let mut fields = body_fields(body)?;

        let mut items = self.collections.entry(path.to_string()).or_default();
        if UUID_KEYED_PATHS.contains(&path) {
            fields
                .entry("uuid")
                .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        } else if !fields.contains_key("id") {
            fields.insert("id".into(), Value::from(next_numeric_id(&items)));
        }

        let record = Value::Object(fields);
        items.push(record.clone());
        debug!("Memory backend created record under {}", path);
        Ok(record)
    }

    async fn update(&self, session: &Session, path: &str, body: MutationBody) -> Result<Value> {
        self.check(session, path)?;
        let fields = body_fields(body)?;

        if let Some(mut document) = self.documents.get_mut(path) {
            merge_into(&mut document, fields);
            return Ok(document.clone());
        }

        let (collection, id) = split_item_path(path)
            .ok_or_else(|| GreenSysError::not_found(format!("PATCH {path}")))?;
        let mut items = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| GreenSysError::not_found(format!("PATCH {path}")))?;
        let item = items
            .iter_mut()
            .find(|item| record_id(item).as_deref() == Some(id))
            .ok_or_else(|| GreenSysError::not_found(format!("PATCH {path}")))?;
        merge_into(item, fields);
        Ok(item.clone())
    }

    async fn delete(&self, session: &Session, path: &str) -> Result<()> {
        self.check(session, path)?;

        let (collection, id) = split_item_path(path)
            .ok_or_else(|| GreenSysError::not_found(format!("DELETE {path}")))?;
        let mut items = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| GreenSysError::not_found(format!("DELETE {path}")))?;
        let position = items
            .iter()
            .position(|item| record_id(item).as_deref() == Some(id))
            .ok_or_else(|| GreenSysError::not_found(format!("DELETE {path}")))?;
        items.remove(position);
        debug!("Memory backend deleted {}", path);
        Ok(())
    }

    async fn download_pdf(&self, session: &Session, pdf_url: &str) -> Result<Download> {
        self.check(session, PDF_PROXY_KEY)?;
        let mut bytes = b"%PDF-1.4\n% GreenSys memory backend\n".to_vec();
        bytes.extend_from_slice(format!("% source: {pdf_url}\n%%EOF\n").as_bytes());
        Ok(Download {
            bytes,
            content_type: Some("application/pdf".into()),
        })
    }
}
