use std::sync::Arc;

use sqlx::PgPool;

use config::Config;
use mail::Mailer;

pub mod config;
pub mod error;
pub mod mail;
pub mod middleware;
pub mod records;
pub mod report;
pub mod result;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub mailer: Arc<Mailer>,
}
