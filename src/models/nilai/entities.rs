use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::score::{ScoreBand, eligibility_label};
use crate::listing::{FieldValue, Listable};
use crate::models::certificates::entities::{ModulRef, SiswaRef};
use crate::models::common::TextOrNumber;
use crate::models::common::de::opt_lenient_f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/nilai.ts")]
pub struct GroupSoalRef {
    #[serde(default)]
    pub judul: Option<String>,
    #[serde(default)]
    pub durasi: Option<i64>,
    #[serde(default)]
    pub modul: Option<ModulRef>,
}

// 学生的一次测验成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/nilai.ts")]
pub struct Nilai {
    pub id: i64,
    #[serde(default, deserialize_with = "opt_lenient_f64")]
    pub skor: Option<f64>,
    #[serde(default)]
    pub jumlah_soal: Option<i64>,
    #[serde(default)]
    pub jumlah_jawaban_benar: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub siswa: Option<SiswaRef>,
    #[serde(default)]
    pub group_soal: Option<GroupSoalRef>,
}

impl Nilai {
    pub fn band(&self) -> Option<ScoreBand> {
        self.skor.map(ScoreBand::from_score)
    }

    fn group(&self) -> Option<&GroupSoalRef> {
        self.group_soal.as_ref()
    }
}

impl Listable for Nilai {
    const SEARCH_FIELDS: &'static [&'static str] = &[
        "siswa.nama",
        "siswa.nis",
        "groupSoal.judul",
        "groupSoal.modul.judul",
    ];
    const FILTER_FIELDS: &'static [&'static str] = &[
        "band",
        "eligibility",
        "groupSoal.judul",
        "groupSoal.modul.judul",
        "siswa.id",
    ];
    const SORT_FIELDS: &'static [&'static str] = &["skor", "createdAt", "siswa.nama", "groupSoal.judul"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "skor" => FieldValue::opt_number(self.skor),
            "createdAt" => FieldValue::opt_date(self.created_at.as_deref()),
            "siswa.id" => FieldValue::opt_int(self.siswa.as_ref().and_then(|s| s.id)),
            "siswa.nama" => {
                FieldValue::opt_text(self.siswa.as_ref().and_then(|s| s.nama.as_deref()))
            }
            "siswa.nis" => {
                TextOrNumber::opt_field(self.siswa.as_ref().and_then(|s| s.nis.as_ref()))
            }
            "groupSoal.judul" => FieldValue::opt_text(self.group().and_then(|g| g.judul.as_deref())),
            "groupSoal.modul.judul" => FieldValue::opt_text(
                self.group()
                    .and_then(|g| g.modul.as_ref())
                    .and_then(|m| m.judul.as_deref()),
            ),
            "band" => FieldValue::opt_text(self.band().map(|b| b.as_str())),
            "eligibility" => FieldValue::opt_text(self.skor.map(eligibility_label)),
            _ => FieldValue::Missing,
        }
    }
}
