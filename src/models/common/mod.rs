pub mod de;
pub mod list;
pub mod pagination;
pub mod response;
pub mod scalar;

pub use list::{ListParams, ListResponse};
pub use pagination::PaginationInfo;
pub use response::ApiResponse;
pub use scalar::TextOrNumber;
