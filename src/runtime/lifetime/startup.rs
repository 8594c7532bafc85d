use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::{self, Backend};
use crate::config::AppConfig;
use crate::errors::Result;

pub struct StartupContext {
    pub backend: Arc<dyn Backend>,
}

/// 准备网关启动的上下文
/// 包括上游后端的创建与回退
pub async fn prepare_gateway_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    debug!(
        "Listing page size: {}, login route: {}",
        config.listing.page_size, config.session.login_route
    );

    let backend = backend::create_backend(&config.upstream).await?;
    warn!("Upstream backend initialized ({})", backend.kind());

    Ok(StartupContext { backend })
}
