use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{GreenSysError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/group_soal.ts")]
pub struct GroupSoalRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judul: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durasi: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kelas_id: Option<i64>,
}

impl GroupSoalRequest {
    pub fn validate_create(&self) -> Result<()> {
        if self.judul.as_deref().is_none_or(|j| j.trim().is_empty()) {
            return Err(GreenSysError::validation("Judul wajib diisi"));
        }
        if self.durasi.is_none() {
            return Err(GreenSysError::validation("Durasi wajib diisi"));
        }
        self.validate_update()
    }

    pub fn validate_update(&self) -> Result<()> {
        if let Some(judul) = &self.judul
            && judul.trim().is_empty()
        {
            return Err(GreenSysError::validation("Judul tidak boleh kosong"));
        }
        if let Some(durasi) = self.durasi
            && durasi <= 0
        {
            return Err(GreenSysError::validation("Durasi harus lebih dari 0 menit"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_soal_validation() {
        let ok = GroupSoalRequest {
            judul: Some("Kuis Bab 1".into()),
            durasi: Some(30),
            kelas_id: Some(2),
        };
        assert!(ok.validate_create().is_ok());

        let zero = GroupSoalRequest {
            durasi: Some(0),
            ..ok.clone()
        };
        assert!(zero.validate_create().is_err());

        let partial = GroupSoalRequest {
            judul: None,
            durasi: Some(45),
            kelas_id: None,
        };
        assert!(partial.validate_update().is_ok());
        assert!(partial.validate_create().is_err());
    }
}
