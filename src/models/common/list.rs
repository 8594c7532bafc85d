use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::PaginationInfo;
use super::de::string_to_i64;
use crate::listing::{ListControls, ListView, SortOrder, SortSpec};

// 列表查询参数（来自HTTP请求）
//
// 除固定参数外，其余查询参数均视为分类筛选，键为字段名，例如 `role=guru`、`band=poor`。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
    #[serde(default = "default_page", deserialize_with = "string_to_i64")]
    pub page: i64,
    pub view_key: Option<String>,
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

fn default_page() -> i64 {
    1
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            search: None,
            sort: None,
            order: None,
            page: 1,
            view_key: None,
            filters: BTreeMap::new(),
        }
    }
}

impl ListParams {
    /// 转换为列表控件状态；回传的 viewKey 与当前输入不一致时回到第 1 页
    pub fn into_controls(self, page_size: usize) -> ListControls {
        let mut controls = ListControls::new(page_size);
        if let Some(search) = self.search {
            controls.set_search(search);
        }
        for (field, value) in self.filters {
            controls.set_filter(field, value);
        }
        if let Some(key) = self.sort.filter(|k| !k.is_empty()) {
            controls.set_sort(Some(SortSpec::new(key, self.order.unwrap_or_default())));
        }
        controls.set_page(self.page.max(1) as usize);
        controls.resume_from(self.view_key.as_deref());
        controls
    }
}

// 列表视图响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/list.ts")]
pub struct ListResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
    pub view_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T: TS + Clone> ListResponse<T> {
    pub fn from_view(view: ListView<'_, T>, controls: &ListControls) -> Self {
        let pagination = PaginationInfo::from(&view);
        Self {
            items: view.into_owned_items(),
            pagination,
            view_key: controls.view_key(),
            warning: None,
        }
    }

    /// 上游获取失败时的空视图
    pub fn empty_with_warning(controls: &ListControls, warning: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationInfo::empty(controls.page_size()),
            view_key: controls.view_key(),
            warning: Some(warning.into()),
        }
    }
}
