pub mod certificates;
pub(crate) mod common;
pub mod group_soal;
pub mod guru;
pub mod kelas;
pub mod modul;
pub mod profile;
pub mod results;
pub mod system;
pub mod users;

pub use certificates::CertificateService;
pub use group_soal::GroupSoalService;
pub use guru::GuruService;
pub use kelas::KelasService;
pub use modul::ModulService;
pub use profile::{ProfileKind, ProfileService};
pub use results::ResultService;
pub use system::SystemService;
pub use users::UserService;
