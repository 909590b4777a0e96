use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_sqlite::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use sqlx::SqlitePool;
use std::sync::Arc;
use tera::Tera;

/// Owns the store handle, the page templates and the services built on top
/// of them.
pub struct Server {
    pub signup_service: Arc<dyn SignupService>,
    pub templates: Arc<Tera>,
    pool: SqlitePool,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let templates = Tera::new(&settings.http.templates)
            .map_err(|e| anyhow!("loading templates {:?}: {e}", settings.http.templates))?;
        info!(glob = %settings.http.templates, "templates loaded");

        let pool = open_pool(&settings.store.url, settings.store.max_connections).await?;
        info!(url = %settings.store.url, "store opened");

        let user_repo: Arc<dyn UserRepo> = Arc::new(SqliteUserRepo::new(pool.clone()));
        let signup_service: Arc<dyn SignupService> = Arc::new(RealSignupService::new(user_repo));

        info!("server started");

        Ok(Self {
            signup_service,
            templates: Arc::new(templates),
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");
        self.pool.close().await;
        info!("store closed");
    }
}
