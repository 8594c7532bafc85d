use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::{FieldValue, Listable};

// 学习模块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/modul.ts")]
pub struct Modul {
    pub id: i64,
    #[serde(default)]
    pub judul: Option<String>,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub kelas_id: Option<i64>,
}

impl Listable for Modul {
    const SEARCH_FIELDS: &'static [&'static str] = &["judul", "deskripsi"];
    const FILTER_FIELDS: &'static [&'static str] = &["kelasId"];
    const SORT_FIELDS: &'static [&'static str] = &["id", "judul"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Number(self.id as f64),
            "judul" => FieldValue::opt_text(self.judul.as_deref()),
            "deskripsi" => FieldValue::opt_text(self.deskripsi.as_deref()),
            "kelasId" => FieldValue::opt_int(self.kelas_id),
            _ => FieldValue::Missing,
        }
    }
}
