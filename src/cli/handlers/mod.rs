mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use std::sync::Arc;

use crate::config::SubhubConfig;
use crate::storage::Store;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: SubhubConfig,
    pub store: Arc<Store>,
}

impl CommandContext {
    pub fn new(config: SubhubConfig, store: Store) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }
}
