use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::generate::VideoGenerator;
use crate::rate_limit::LoginRateLimiter;
use crate::storage::ContentStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub storage: Arc<dyn ContentStore>,
    pub generator: Arc<dyn VideoGenerator>,
    pub login_limiter: LoginRateLimiter,
}
