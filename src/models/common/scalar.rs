//! 后端对年级代码、NIS、NIP 有时给字符串、有时给数字，这里保留原始类型，
//! 数字按数值排序，字符串按字典序排序。

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::FieldValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum TextOrNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TextOrNumber {
    /// 搜索与筛选使用的文本形式
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            TextOrNumber::Text(s) => Cow::Borrowed(s),
            _ => self.field_value().as_text().into_owned().into(),
        }
    }

    pub fn field_value(&self) -> FieldValue<'_> {
        match self {
            TextOrNumber::Int(n) => FieldValue::Number(*n as f64),
            TextOrNumber::Float(n) => FieldValue::opt_number(Some(*n)),
            TextOrNumber::Text(s) => FieldValue::text(s),
        }
    }

    pub fn opt_field(value: Option<&Self>) -> FieldValue<'_> {
        value
            .map(TextOrNumber::field_value)
            .unwrap_or(FieldValue::Missing)
    }
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for TextOrNumber {
    fn from(value: &str) -> Self {
        TextOrNumber::Text(value.to_string())
    }
}

impl From<i64> for TextOrNumber {
    fn from(value: i64) -> Self {
        TextOrNumber::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_keeps_wire_kind() {
        let values: Vec<Option<TextOrNumber>> =
            serde_json::from_str(r#"[10, "XI", 7.5, null]"#).unwrap();
        assert_eq!(values[0], Some(TextOrNumber::Int(10)));
        assert_eq!(values[1], Some(TextOrNumber::Text("XI".into())));
        assert_eq!(values[2], Some(TextOrNumber::Float(7.5)));
        assert_eq!(values[3], None);

        assert_eq!(serde_json::to_string(&TextOrNumber::Int(10)).unwrap(), "10");
        assert_eq!(serde_json::to_string(&TextOrNumber::from("X")).unwrap(), "\"X\"");
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let nine = TextOrNumber::Int(9);
        let ten = TextOrNumber::Int(10);
        assert_eq!(nine.field_value().compare(&ten.field_value()), Ordering::Less);
        assert_eq!(ten.as_text(), "10");
        assert_eq!(TextOrNumber::Float(72.5).to_string(), "72.5");
    }

    #[test]
    fn test_missing_stays_missing() {
        assert!(TextOrNumber::opt_field(None).is_missing());
    }
}
