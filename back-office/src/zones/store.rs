//! Persistence seam used by the zone handlers

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::Zone;
use sqlx::SqlitePool;

use super::{ZoneFields, ZoneId};
use crate::db::repository::{RepoResult, zone};

pub type DynZoneStore = Arc<dyn ZoneStore>;

#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// Persist a validated zone and return the id the database assigned
    async fn insert(&self, fields: &ZoneFields) -> RepoResult<i64>;
    async fn get(&self, id: ZoneId) -> RepoResult<Option<Zone>>;
    async fn list(&self) -> RepoResult<Vec<Zone>>;
    async fn update(&self, id: ZoneId, fields: &ZoneFields) -> RepoResult<()>;
    async fn set_active(&self, id: ZoneId, active: bool) -> RepoResult<()>;
    async fn delete(&self, id: ZoneId) -> RepoResult<()>;
}

/// [`ZoneStore`] backed by the `zone` table
#[derive(Debug, Clone)]
pub struct SqliteZoneStore {
    pool: SqlitePool,
}

impl SqliteZoneStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ZoneStore for SqliteZoneStore {
    async fn insert(&self, fields: &ZoneFields) -> RepoResult<i64> {
        zone::create(&self.pool, &fields.name, fields.active).await
    }

    async fn get(&self, id: ZoneId) -> RepoResult<Option<Zone>> {
        zone::find_by_id(&self.pool, id.value()).await
    }

    async fn list(&self) -> RepoResult<Vec<Zone>> {
        zone::find_all(&self.pool).await
    }

    async fn update(&self, id: ZoneId, fields: &ZoneFields) -> RepoResult<()> {
        zone::update(&self.pool, id.value(), &fields.name, fields.active).await
    }

    async fn set_active(&self, id: ZoneId, active: bool) -> RepoResult<()> {
        zone::set_active(&self.pool, id.value(), active).await
    }

    async fn delete(&self, id: ZoneId) -> RepoResult<()> {
        zone::delete(&self.pool, id.value()).await
    }
}
