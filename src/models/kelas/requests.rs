use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{GreenSysError, Result};
use crate::models::common::TextOrNumber;

// 创建 / 更新班级请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/kelas.ts")]
pub struct KelasRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kelas: Option<TextOrNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nama_kelas: Option<String>,
}

impl KelasRequest {
    /// 创建时必须提供班级名称
    pub fn validate_create(&self) -> Result<()> {
        match self.nama_kelas.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(GreenSysError::validation("Nama kelas wajib diisi")),
        }
    }

    /// 更新时名称可省略，但不能为空白
    pub fn validate_update(&self) -> Result<()> {
        if let Some(name) = &self.nama_kelas
            && name.trim().is_empty()
        {
            return Err(GreenSysError::validation("Nama kelas tidak boleh kosong"));
        }
        Ok(())
    }
}
