pub mod certificates;

pub mod group_soal;

pub mod guru;

pub mod kelas;

pub mod modul;

pub mod profile;

pub mod results;

pub mod system;

pub mod users;

pub use certificates::configure_certificate_routes;
pub use group_soal::configure_group_soal_routes;
pub use guru::configure_guru_routes;
pub use kelas::configure_kelas_routes;
pub use modul::configure_modul_routes;
pub use profile::configure_profile_routes;
pub use results::configure_result_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部网关路由
pub fn configure_all(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_kelas_routes)
        .configure(configure_user_routes)
        .configure(configure_guru_routes)
        .configure(configure_certificate_routes)
        .configure(configure_result_routes)
        .configure(configure_group_soal_routes)
        .configure(configure_modul_routes)
        .configure(configure_profile_routes);
}
