use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 字段取值
///
/// 缺失值的处理规则：不参与搜索与筛选匹配，排序时无论升降序均排在最后。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Date(DateTime<Utc>),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn text(value: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(value))
    }

    pub fn opt_text(value: Option<&'a str>) -> Self {
        value.map(Self::text).unwrap_or(FieldValue::Missing)
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        match value {
            Some(n) if n.is_finite() => FieldValue::Number(n),
            _ => FieldValue::Missing,
        }
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value
            .map(|n| FieldValue::Number(n as f64))
            .unwrap_or(FieldValue::Missing)
    }

    /// 日期字段：无法解析的字符串视为缺失
    pub fn opt_date(value: Option<&str>) -> Self {
        value
            .and_then(parse_date)
            .map(FieldValue::Date)
            .unwrap_or(FieldValue::Missing)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// 文本形式，缺失值为空串
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_ref()),
            FieldValue::Number(n) => Cow::Owned(format_number(*n)),
            FieldValue::Date(d) => Cow::Owned(d.to_rfc3339()),
            FieldValue::Missing => Cow::Borrowed(""),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Missing => 3,
        }
    }

    /// 同类取值按自然顺序比较；不同类按 Number < Date < Text < Missing
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.as_ref().cmp(b.as_ref()),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// 解析后端返回的日期
///
/// 支持 RFC 3339、`YYYY-MM-DD HH:MM:SS` 与 `YYYY-MM-DD`，无时区信息时按 UTC 处理。
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let a = parse_date("2024-03-01T08:30:00.000Z").unwrap();
        let b = parse_date("2024-03-01 08:30:00").unwrap();
        assert_eq!(a, b);
        let c = parse_date("2024-03-01").unwrap();
        assert!(c < a);
        assert!(parse_date("kemarin").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_number_text_form() {
        assert_eq!(FieldValue::Number(7.0).as_text(), "7");
        assert_eq!(FieldValue::Number(72.5).as_text(), "72.5");
        assert_eq!(FieldValue::Missing.as_text(), "");
    }

    #[test]
    fn test_unparseable_date_is_missing() {
        assert!(FieldValue::opt_date(Some("bukan tanggal")).is_missing());
        assert!(FieldValue::opt_date(None).is_missing());
        assert!(!FieldValue::opt_date(Some("2023-12-31")).is_missing());
    }

    #[test]
    fn test_dates_compare_chronologically_not_lexically() {
        // 字符串比较会得到相反结果
        let earlier = FieldValue::opt_date(Some("2024-03-01T10:00:00+07:00"));
        let later = FieldValue::opt_date(Some("2024-03-01T05:00:00Z"));
        assert_eq!(earlier.compare(&later), Ordering::Less);
        assert!("2024-03-01T10:00:00+07:00" > "2024-03-01T05:00:00Z");
    }

    #[test]
    fn test_mixed_kinds_have_fixed_order() {
        let n = FieldValue::Number(100.0);
        let t = FieldValue::text("10");
        assert_eq!(n.compare(&t), Ordering::Less);
        assert_eq!(t.compare(&n), Ordering::Greater);
    }
}
