use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::{FieldValue, Listable};

// 有时限的题组，归属于某个班级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/group_soal.ts")]
pub struct GroupSoal {
    pub id: i64,
    #[serde(default)]
    pub judul: Option<String>,
    // 分钟
    #[serde(default)]
    pub durasi: Option<i64>,
    #[serde(default)]
    pub kelas_id: Option<i64>,
}

impl Listable for GroupSoal {
    const SEARCH_FIELDS: &'static [&'static str] = &["judul"];
    const FILTER_FIELDS: &'static [&'static str] = &["kelasId"];
    const SORT_FIELDS: &'static [&'static str] = &["judul", "durasi"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "judul" => FieldValue::opt_text(self.judul.as_deref()),
            "durasi" => FieldValue::opt_int(self.durasi),
            "kelasId" => FieldValue::opt_int(self.kelas_id),
            _ => FieldValue::Missing,
        }
    }
}
