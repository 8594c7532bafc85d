use std::cmp::Ordering;

use super::{FieldValue, ListControls, Listable, SortOrder, SortSpec};

/// 某一页的派生视图
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T: Clone> ListView<'_, T> {
    pub fn into_owned_items(self) -> Vec<T> {
        self.items.into_iter().cloned().collect()
    }
}

/// 由原始集合与控件状态计算当前页
pub fn derive_view<'a, T: Listable>(items: &'a [T], controls: &ListControls) -> ListView<'a, T> {
    let mut filtered = filter_items(items, controls);
    if let Some(sort) = controls.sort() {
        sort_items(&mut filtered, sort);
    }

    let total = filtered.len();
    ListView {
        items: paginate(&filtered, controls.page(), controls.page_size()),
        page: controls.page(),
        page_size: controls.page_size(),
        total,
        total_pages: total_pages(total, controls.page_size()),
    }
}

/// 搜索 + 分类筛选，保持原有顺序
pub fn filter_items<'a, T: Listable>(items: &'a [T], controls: &ListControls) -> Vec<&'a T> {
    let term = controls.search().to_lowercase();
    items
        .iter()
        .filter(|item| term.is_empty() || matches_search(*item, &term))
        .filter(|item| {
            controls
                .active_filters()
                .all(|(field, value)| matches_filter(*item, field, value))
        })
        .collect()
}

fn matches_search<T: Listable>(item: &T, term_lower: &str) -> bool {
    T::SEARCH_FIELDS.iter().any(|name| {
        item.field(name)
            .as_text()
            .to_lowercase()
            .contains(term_lower)
    })
}

fn matches_filter<T: Listable>(item: &T, field: &str, expected: &str) -> bool {
    let value = item.field(field);
    !value.is_missing() && value.as_text() == expected
}

/// 稳定排序，缺失值始终排在最后
pub fn sort_items<T: Listable>(items: &mut [&T], sort: &SortSpec) {
    items.sort_by(|a, b| compare_for_sort(&a.field(&sort.key), &b.field(&sort.key), sort.order));
}

fn compare_for_sort(a: &FieldValue<'_>, b: &FieldValue<'_>, order: SortOrder) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match order {
            SortOrder::Asc => a.compare(b),
            SortOrder::Desc => a.compare(b).reverse(),
        },
    }
}

/// 取第 `page` 页（从 1 开始），越界返回空
pub fn paginate<'a, T>(items: &[&'a T], page: usize, page_size: usize) -> Vec<&'a T> {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).copied().collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        nama: Option<String>,
        nis: Option<String>,
        gender: Option<String>,
        skor: Option<f64>,
        tanggal: Option<String>,
    }

    impl Row {
        fn new(id: i64, nama: &str) -> Self {
            Self {
                id,
                nama: Some(nama.to_string()),
                nis: Some(format!("2024{id:03}")),
                gender: None,
                skor: None,
                tanggal: None,
            }
        }
    }

    impl Listable for Row {
        const SEARCH_FIELDS: &'static [&'static str] = &["nama", "nis"];
        const FILTER_FIELDS: &'static [&'static str] = &["gender"];
        const SORT_FIELDS: &'static [&'static str] = &["nama", "skor", "tanggal"];

        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "nama" => FieldValue::opt_text(self.nama.as_deref()),
                "nis" => FieldValue::opt_text(self.nis.as_deref()),
                "gender" => FieldValue::opt_text(self.gender.as_deref()),
                "skor" => FieldValue::opt_number(self.skor),
                "tanggal" => FieldValue::opt_date(self.tanggal.as_deref()),
                _ => FieldValue::Missing,
            }
        }
    }

    fn ids(items: &[&Row]) -> Vec<i64> {
        items.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<Row> {
        ["Budi", "Sari Dewi", "andi", "Rudi", "Wulan", "Sarifah"]
            .iter()
            .enumerate()
            .map(|(i, n)| Row::new(i as i64 + 1, n))
            .collect()
    }

    #[test]
    fn test_empty_controls_is_identity() {
        let rows = sample();
        let controls = ListControls::new(100);
        let view = derive_view(&rows, &controls);
        assert_eq!(view.into_owned_items(), rows);
    }

    #[test]
    fn test_search_is_case_insensitive_and_complete() {
        let rows = sample();
        let mut controls = ListControls::new(100);
        controls.set_search("SARI");
        let kept = filter_items(&rows, &controls);
        assert_eq!(ids(&kept), vec![2, 6]);

        for row in &rows {
            let hit = row
                .nama
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains("sari")
                || row.nis.as_deref().unwrap_or("").contains("sari");
            assert_eq!(kept.iter().any(|r| r.id == row.id), hit);
        }
    }

    #[test]
    fn test_search_on_missing_field_does_not_panic() {
        let mut rows = sample();
        rows[0].nama = None;
        rows[0].nis = None;
        let mut controls = ListControls::new(10);
        controls.set_search("budi");
        assert!(filter_items(&rows, &controls).is_empty());
    }

    #[test]
    fn test_search_matches_secondary_field() {
        let rows = sample();
        let mut controls = ListControls::new(10);
        controls.set_search("2024005");
        assert_eq!(ids(&filter_items(&rows, &controls)), vec![5]);
    }

    #[test]
    fn test_categorical_filter_exact_match() {
        let mut rows = sample();
        rows[0].gender = Some("L".into());
        rows[1].gender = Some("P".into());
        rows[2].gender = Some("L".into());

        let mut controls = ListControls::new(10);
        controls.set_filter("gender", "L");
        assert_eq!(ids(&filter_items(&rows, &controls)), vec![1, 3]);

        controls.set_filter("gender", "");
        assert_eq!(filter_items(&rows, &controls).len(), rows.len());
    }

    #[test]
    fn test_sort_asc_desc_reverses_distinct_keys() {
        let rows = sample();
        let mut items: Vec<&Row> = rows.iter().collect();
        sort_items(&mut items, &SortSpec::new("nama", SortOrder::Asc));
        let asc = ids(&items);
        sort_items(&mut items, &SortSpec::new("nama", SortOrder::Desc));
        let mut desc = ids(&items);
        desc.reverse();
        assert_eq!(asc, desc);
        // 大写字母排在小写之前
        assert_eq!(asc.last(), Some(&3));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut rows = sample();
        for row in &mut rows {
            row.skor = Some(80.0);
        }
        rows[3].skor = Some(50.0);
        let mut items: Vec<&Row> = rows.iter().collect();
        sort_items(&mut items, &SortSpec::new("skor", SortOrder::Desc));
        assert_eq!(ids(&items), vec![1, 2, 3, 5, 6, 4]);
    }

    #[test]
    fn test_missing_values_sort_last_both_directions() {
        let mut rows = sample();
        rows[0].skor = Some(40.0);
        rows[1].skor = None;
        rows[2].skor = Some(90.0);
        rows.truncate(3);

        let mut items: Vec<&Row> = rows.iter().collect();
        sort_items(&mut items, &SortSpec::new("skor", SortOrder::Asc));
        assert_eq!(ids(&items), vec![1, 3, 2]);
        sort_items(&mut items, &SortSpec::new("skor", SortOrder::Desc));
        assert_eq!(ids(&items), vec![3, 1, 2]);
    }

    #[test]
    fn test_date_sort_uses_parsed_dates() {
        let mut rows = sample();
        rows.truncate(3);
        rows[0].tanggal = Some("2024-03-01T10:00:00+07:00".into());
        rows[1].tanggal = Some("2024-03-01T05:00:00Z".into());
        rows[2].tanggal = Some("2024-02-28".into());

        let mut items: Vec<&Row> = rows.iter().collect();
        sort_items(&mut items, &SortSpec::new("tanggal", SortOrder::Asc));
        assert_eq!(ids(&items), vec![3, 1, 2]);
    }

    #[test]
    fn test_pages_partition_filtered_set() {
        let rows: Vec<Row> = (1..=23).map(|i| Row::new(i, "siswa")).collect();
        let mut controls = ListControls::new(5);
        let first = derive_view(&rows, &controls);
        assert_eq!(first.total, 23);
        assert_eq!(first.total_pages, 5);

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            controls.set_page(page);
            let view = derive_view(&rows, &controls);
            assert!(view.items.len() <= 5);
            seen.extend(ids(&view.items));
        }
        assert_eq!(seen, (1..=23).collect::<Vec<_>>());

        controls.set_page(6);
        assert!(derive_view(&rows, &controls).items.is_empty());
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let rows: Vec<Row> = Vec::new();
        let view = derive_view(&rows, &ListControls::new(10));
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_derive_is_idempotent_and_does_not_mutate() {
        let rows = sample();
        let before = rows.clone();
        let mut controls = ListControls::new(2);
        controls.set_sort(Some(SortSpec::new("nama", SortOrder::Desc)));
        let a = ids(&derive_view(&rows, &controls).items);
        let b = ids(&derive_view(&rows, &controls).items);
        assert_eq!(a, b);
        assert_eq!(rows, before);
    }
}
