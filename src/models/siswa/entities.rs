use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::TextOrNumber;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/siswa.ts")]
pub struct Siswa {
    pub id: i64,
    #[serde(default)]
    pub nis: Option<TextOrNumber>,
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub kelas_id: Option<i64>,
}

/// 性别归一化结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// 后端存在 `L`/`P`、`Laki-laki`/`Perempuan`、`male`/`female` 多种写法
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Gender::Unknown;
        };
        match raw.trim().to_lowercase().as_str() {
            "l" | "laki-laki" | "laki laki" | "lakilaki" | "male" => Gender::Male,
            "p" | "perempuan" | "female" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl Siswa {
    pub fn gender(&self) -> Gender {
        Gender::parse(self.gender.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_spellings() {
        assert_eq!(Gender::parse(Some("L")), Gender::Male);
        assert_eq!(Gender::parse(Some("Laki-laki")), Gender::Male);
        assert_eq!(Gender::parse(Some(" perempuan ")), Gender::Female);
        assert_eq!(Gender::parse(Some("P")), Gender::Female);
        assert_eq!(Gender::parse(Some("-")), Gender::Unknown);
        assert_eq!(Gender::parse(None), Gender::Unknown);
    }

    #[test]
    fn test_siswa_camel_case() {
        let s: Siswa =
            serde_json::from_str(r#"{"id":3,"nis":9912,"nama":"Sari","kelasId":2}"#).unwrap();
        assert_eq!(s.nis, Some(TextOrNumber::Int(9912)));
        assert_eq!(s.kelas_id, Some(2));
        assert_eq!(s.gender(), Gender::Unknown);
    }
}
