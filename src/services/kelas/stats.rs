use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use super::KelasService;
use crate::backend::Resource;
use crate::dataflow::{CollectionFetcher, FetchScope, JoinSide, join_collections};
use crate::models::kelas::entities::Kelas;
use crate::models::kelas::responses::{KelasStats, KelasStatsResponse};
use crate::models::siswa::entities::{Gender, Siswa};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::error_response;
use crate::session::Session;

// 合并失败时返回的数据：失败的一侧
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/kelas.ts")]
pub struct JoinFailureData {
    pub failed: Vec<String>,
}

pub async fn kelas_stats(
    service: &KelasService,
    session: Session,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let backend = match service.get_backend(request) {
        Ok(backend) => backend,
        Err(e) => return Ok(error_response(&e)),
    };

    let fetcher = CollectionFetcher::new(backend, session);
    let scope = FetchScope::new();
    let joined = join_collections::<Kelas, Siswa>(
        &fetcher,
        &scope,
        JoinSide::new("kelas", Resource::Kelas.path()),
        JoinSide::new("siswa", Resource::Siswa.path()),
    )
    .await;

    match joined {
        Ok((kelas, siswa)) => {
            let stats = compute_kelas_stats(&kelas, &siswa);
            debug!(
                "Computed stats for {} kelas / {} siswa",
                stats.items.len(),
                stats.total_siswa
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                stats,
                "Statistics retrieved successfully",
            )))
        }
        Err(join_error) => {
            let failed = join_error.failed_sides();
            let err = join_error.into_error();
            if err.is_session_expired() {
                return Ok(error_response(&err));
            }
            Ok(HttpResponse::BadGateway().json(ApiResponse::error(
                ErrorCode::StatsJoinFailed,
                JoinFailureData { failed },
                err.user_message(),
            )))
        }
    }
}

/// 按班级统计学生人数与性别分布
pub fn compute_kelas_stats(kelas: &[Kelas], siswa: &[Siswa]) -> KelasStatsResponse {
    let mut counts: HashMap<i64, (i64, i64, i64)> = HashMap::new();
    let mut unassigned = 0;

    for s in siswa {
        let known = s.kelas_id.filter(|id| kelas.iter().any(|k| k.id == *id));
        let Some(kelas_id) = known else {
            unassigned += 1;
            continue;
        };
        let entry = counts.entry(kelas_id).or_default();
        entry.0 += 1;
        match s.gender() {
            Gender::Male => entry.1 += 1,
            Gender::Female => entry.2 += 1,
            Gender::Unknown => {}
        }
    }

    let items = kelas
        .iter()
        .map(|k| {
            let (total, male, female) = counts.get(&k.id).copied().unwrap_or_default();
            KelasStats {
                id: k.id,
                kelas: k.kelas.clone(),
                nama_kelas: k.nama_kelas.clone(),
                total_siswa: total,
                laki_laki: male,
                perempuan: female,
            }
        })
        .collect();

    KelasStatsResponse {
        items,
        total_siswa: siswa.len() as i64,
        unassigned_siswa: unassigned,
    }
}
