//! 列表视图引擎
//!
//! 对已获取的集合做搜索、分类筛选、排序与分页，纯函数实现，不修改输入。
//! 每种实体通过 [`Listable`] 声明可搜索、可筛选、可排序的字段以及字段取值方式。

pub mod controls;
pub mod engine;
pub mod field;
pub mod score;

pub use controls::{ListControls, SortOrder, SortSpec};
pub use engine::{ListView, derive_view, filter_items, paginate, sort_items, total_pages};
pub use field::{FieldValue, parse_date};
pub use score::{PASS_THRESHOLD, ScoreBand};

/// 可参与列表视图计算的实体
///
/// 字段名使用后端 JSON 的命名（camelCase），嵌套字段以 `.` 连接，例如 `siswa.nama`。
pub trait Listable {
    /// 搜索时匹配的字段
    const SEARCH_FIELDS: &'static [&'static str];
    /// 允许分类筛选的字段
    const FILTER_FIELDS: &'static [&'static str];
    /// 允许排序的字段
    const SORT_FIELDS: &'static [&'static str];

    /// 按字段名取值，未知字段或缺失值返回 [`FieldValue::Missing`]
    fn field(&self, name: &str) -> FieldValue<'_>;
}
