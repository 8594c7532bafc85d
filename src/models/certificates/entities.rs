use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::{FieldValue, Listable};
use crate::models::common::TextOrNumber;

// 证书、成绩中内嵌的学生信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct SiswaRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(default)]
    pub nis: Option<TextOrNumber>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct ModulRef {
    #[serde(default)]
    pub judul: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct Certificate {
    pub id: i64,
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub siswa: Option<SiswaRef>,
    #[serde(default)]
    pub modul: Option<ModulRef>,
}

impl Certificate {
    fn siswa_nama(&self) -> Option<&str> {
        self.siswa.as_ref().and_then(|s| s.nama.as_deref())
    }

    fn siswa_nis(&self) -> Option<&TextOrNumber> {
        self.siswa.as_ref().and_then(|s| s.nis.as_ref())
    }

    fn modul_judul(&self) -> Option<&str> {
        self.modul.as_ref().and_then(|m| m.judul.as_deref())
    }
}

impl Listable for Certificate {
    const SEARCH_FIELDS: &'static [&'static str] = &["siswa.nama", "siswa.nis", "modul.judul"];
    const FILTER_FIELDS: &'static [&'static str] = &["modul.judul"];
    const SORT_FIELDS: &'static [&'static str] = &["createdAt", "siswa.nama", "modul.judul"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "siswa.nama" => FieldValue::opt_text(self.siswa_nama()),
            "siswa.nis" => TextOrNumber::opt_field(self.siswa_nis()),
            "modul.judul" => FieldValue::opt_text(self.modul_judul()),
            "createdAt" => FieldValue::opt_date(self.created_at.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListControls, derive_view};

    fn certificate(id: i64, nama: &str) -> Certificate {
        Certificate {
            id,
            certificate_url: Some(format!("https://cdn.sekolah.sch.id/cert/{id}.pdf")),
            created_at: Some(format!("2024-05-{:02}T08:00:00Z", id)),
            siswa: Some(SiswaRef {
                id: Some(100 + id),
                nama: Some(nama.to_string()),
                nis: Some(TextOrNumber::Int(5000 + id)),
            }),
            modul: Some(ModulRef {
                judul: Some("Ekosistem".to_string()),
            }),
        }
    }

    #[test]
    fn test_search_twelve_certificates_for_sari() {
        let names = [
            "Budi", "Sari Wulandari", "Andi", "Rina", "Dewi", "Joko", "Tono", "Maya",
            "Nur Sari", "Agus", "Lina", "Eko",
        ];
        let certs: Vec<Certificate> = names
            .iter()
            .enumerate()
            .map(|(i, n)| certificate(i as i64 + 1, n))
            .collect();
        assert_eq!(certs.len(), 12);

        let mut controls = ListControls::new(10);
        controls.set_search("sari");
        let view = derive_view(&certs, &controls);
        assert_eq!(view.total, 2);
        assert_eq!(view.total_pages, 1);
        let ids: Vec<i64> = view.items.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn test_nested_missing_fields() {
        let raw = r#"{"id": 7, "certificateUrl": null, "siswa": null}"#;
        let cert: Certificate = serde_json::from_str(raw).unwrap();
        assert!(cert.field("siswa.nama").is_missing());
        assert!(cert.field("createdAt").is_missing());
    }
}
