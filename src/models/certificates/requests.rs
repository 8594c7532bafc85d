use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{GreenSysError, Result};
use crate::utils::validate::validate_http_url;

const DEFAULT_FILE_NAME: &str = "sertifikat.pdf";

// 证书下载请求，经后端代理获取 PDF
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct DownloadCertificateRequest {
    pub pdf_url: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl DownloadCertificateRequest {
    pub fn validate(&self) -> Result<()> {
        validate_http_url(&self.pdf_url).map_err(GreenSysError::validation)
    }

    /// 下载文件名：优先请求中指定的名称，其次取 URL 最后一段
    pub fn attachment_name(&self) -> String {
        let candidate = self
            .file_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                self.pdf_url
                    .split(['?', '#'])
                    .next()
                    .and_then(|path| path.rsplit('/').next())
                    .filter(|seg| !seg.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        // 去掉可能破坏 Content-Disposition 的字符
        candidate
            .chars()
            .filter(|c| !matches!(c, '"' | '\\' | '\r' | '\n'))
            .collect()
    }
}
