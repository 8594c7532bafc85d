use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};

use super::Listable;
use crate::errors::{GreenSysError, Result};

/// 表示"不筛选"的取值
const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }
}

/// 列表控件状态：搜索词、分类筛选、排序、页码
///
/// 搜索、筛选或排序发生变化时页码回到第 1 页；页码本身的变化不影响其他输入。
#[derive(Debug, Clone, PartialEq)]
pub struct ListControls {
    search: String,
    filters: BTreeMap<String, String>,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl ListControls {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 生效中的筛选条件
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    /// 设置分类筛选，空串或 `all` 表示清除
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        let changed = if value.is_empty() || value == FILTER_ALL {
            self.filters.remove(&field).is_some()
        } else {
            self.filters.insert(field, value.clone()).as_ref() != Some(&value)
        };
        if changed {
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        if sort != self.sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// 搜索、筛选与排序的摘要，页码不参与计算
    ///
    /// 对规范化 JSON（筛选按字段名排序）取 SHA-256 前 8 字节，
    /// 不同进程、不同版本算出的值一致，客户端回传的 key 在重启后仍然有效。
    pub fn view_key(&self) -> String {
        let canonical = json!([
            self.search,
            self.filters,
            self.sort.as_ref().map(|s| s.key.as_str()),
            self.sort.as_ref().map(|s| s.order),
        ])
        .to_string();
        let digest = Sha256::digest(canonical.as_bytes());
        digest[..8].iter().map(|b| format!("{b:02x}")).collect()
    }

    /// 根据客户端回传的摘要恢复分页：摘要不一致说明输入已变化，回到第 1 页
    pub fn resume_from(&mut self, previous_key: Option<&str>) {
        if let Some(previous) = previous_key
            && previous != self.view_key()
        {
            self.page = 1;
        }
    }

    /// 检查排序与筛选字段是否在实体允许的范围内
    pub fn validate_for<T: Listable>(&self) -> Result<()> {
        if let Some(sort) = &self.sort
            && !T::SORT_FIELDS.contains(&sort.key.as_str())
        {
            return Err(GreenSysError::validation(format!(
                "Cannot sort by '{}'. Supported: {}",
                sort.key,
                T::SORT_FIELDS.join(", ")
            )));
        }
        if let Some((field, _)) = self
            .filters
            .iter()
            .find(|(field, _)| !T::FILTER_FIELDS.contains(&field.as_str()))
        {
            return Err(GreenSysError::validation(format!(
                "Cannot filter by '{}'. Supported: {}",
                field,
                T::FILTER_FIELDS.join(", ")
            )));
        }
        Ok(())
    }
}
