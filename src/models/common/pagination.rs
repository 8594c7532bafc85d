use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::ListView;

// 分页响应信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> From<&ListView<'_, T>> for PaginationInfo {
    fn from(view: &ListView<'_, T>) -> Self {
        Self {
            page: view.page as i64,
            page_size: view.page_size as i64,
            total: view.total as i64,
            total_pages: view.total_pages as i64,
        }
    }
}

impl PaginationInfo {
    /// 空列表（上游失败且该视图允许降级为空时使用）
    pub fn empty(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size as i64,
            total: 0,
            total_pages: 0,
        }
    }
}
