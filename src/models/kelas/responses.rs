use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::TextOrNumber;

// 单个班级的学生统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/kelas.ts")]
pub struct KelasStats {
    pub id: i64,
    pub kelas: Option<TextOrNumber>,
    pub nama_kelas: Option<String>,
    pub total_siswa: i64,
    pub laki_laki: i64,
    pub perempuan: i64,
}

// 班级统计响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/kelas.ts")]
pub struct KelasStatsResponse {
    pub items: Vec<KelasStats>,
    pub total_siswa: i64,
    // 未分配到任何已知班级的学生数
    pub unassigned_siswa: i64,
}
