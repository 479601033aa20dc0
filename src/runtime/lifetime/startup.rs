use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::AssignmentStore;
use crate::storage::{Storage, create_storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub store: AssignmentStore,
}

/// 准备会话启动的上下文
/// 包括存储后端和分配状态
pub async fn prepare_session_startup(config: &AppConfig) -> Result<StartupContext> {
    warn!(
        "Attempting to create {} storage backend",
        config.storage.backend
    );
    let storage = create_storage(&config.storage).await?;
    warn!("Storage backend initialized");

    if config.storage.simulated_delay_ms > 0 {
        debug!(
            "Simulating {} ms latency per storage call",
            config.storage.simulated_delay_ms
        );
    }

    let store = AssignmentStore::new(storage.clone(), config.course_limits());
    Ok(StartupContext { storage, store })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_startup_with_defaults() {
        let config = AppConfig::default();
        let mut context = prepare_session_startup(&config).await.unwrap();
        assert!(!context.storage.list_users().await.unwrap().is_empty());
        assert!(context.store.list_classes_for_teacher(1).await.is_ok());
    }
}
