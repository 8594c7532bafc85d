use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::{FieldValue, Listable};
use crate::models::common::TextOrNumber;
use crate::models::common::de::opt_string_or_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guru.ts")]
pub struct UserRef {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/guru.ts")]
pub struct Guru {
    pub id: i64,
    #[serde(default)]
    pub nip: Option<TextOrNumber>,
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub no_hp: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub tanggal_lahir: Option<String>,
    // 照片地址
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl Listable for Guru {
    const SEARCH_FIELDS: &'static [&'static str] = &["nama", "nip", "email", "user.username"];
    const FILTER_FIELDS: &'static [&'static str] = &["gender"];
    const SORT_FIELDS: &'static [&'static str] = &["nama", "nip", "tanggalLahir"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "nama" => FieldValue::opt_text(self.nama.as_deref()),
            "nip" => TextOrNumber::opt_field(self.nip.as_ref()),
            "email" => FieldValue::opt_text(self.email.as_deref()),
            "gender" => FieldValue::opt_text(self.gender.as_deref()),
            "tanggalLahir" => FieldValue::opt_date(self.tanggal_lahir.as_deref()),
            "user.username" => {
                FieldValue::opt_text(self.user.as_ref().and_then(|u| u.username.as_deref()))
            }
            _ => FieldValue::Missing,
        }
    }
}
