use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::{FieldValue, Listable};
use crate::models::common::TextOrNumber;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/kelas.ts")]
pub struct Kelas {
    pub id: i64,
    // 年级代码，如 "X"、"XI" 或 10
    #[serde(default)]
    pub kelas: Option<TextOrNumber>,
    // 班级显示名称
    #[serde(default)]
    pub nama_kelas: Option<String>,
}

impl Listable for Kelas {
    const SEARCH_FIELDS: &'static [&'static str] = &["kelas", "namaKelas"];
    const FILTER_FIELDS: &'static [&'static str] = &["kelas"];
    const SORT_FIELDS: &'static [&'static str] = &["id", "kelas", "namaKelas"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Number(self.id as f64),
            "kelas" => TextOrNumber::opt_field(self.kelas.as_ref()),
            "namaKelas" => FieldValue::opt_text(self.nama_kelas.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListControls, SortOrder, SortSpec, derive_view};

    fn parse(raw: &str) -> Vec<Kelas> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_numeric_level_sorts_by_value() {
        let kelas = parse(
            r#"[{"id":1,"kelas":10},{"id":2,"kelas":9},{"id":3,"kelas":12},{"id":4,"kelas":11}]"#,
        );
        let mut controls = ListControls::new(10);
        controls.set_sort(Some(SortSpec::new("kelas", SortOrder::Asc)));
        let order: Vec<String> = derive_view(&kelas, &controls)
            .items
            .iter()
            .map(|k| k.kelas.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(order, vec!["9", "10", "11", "12"]);

        controls.set_sort(Some(SortSpec::new("kelas", SortOrder::Desc)));
        let ids: Vec<i64> = derive_view(&kelas, &controls)
            .items
            .iter()
            .map(|k| k.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_numeric_level_still_searchable_and_filterable() {
        let kelas = parse(r#"[{"id":1,"kelas":10,"namaKelas":"X A"},{"id":2,"kelas":"XI"}]"#);
        let mut controls = ListControls::new(10);
        controls.set_filter("kelas", "10");
        assert_eq!(derive_view(&kelas, &controls).total, 1);

        let mut controls = ListControls::new(10);
        controls.set_search("xi");
        let view = derive_view(&kelas, &controls);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, 2);
    }

    #[test]
    fn test_level_round_trips_with_wire_kind() {
        let kelas = parse(r#"[{"id":1,"kelas":10},{"id":2,"kelas":"X"}]"#);
        let out = serde_json::to_value(&kelas).unwrap();
        assert_eq!(out[0]["kelas"], 10);
        assert_eq!(out[1]["kelas"], "X");
    }
}
