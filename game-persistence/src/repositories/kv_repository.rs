use async_trait::async_trait;
use game_core::{KeyValueStore, StoreError};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::entities::{kv_entries, prelude::*};

/// SQLite-backed [`KeyValueStore`]: one row per key in `kv_entries`.
pub struct KvRepository {
    db: DatabaseConnection,
}

impl KvRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn backend_error(err: DbErr) -> StoreError {
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl KeyValueStore for KvRepository {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entry = KvEntries::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(entry.map(|model| model.value))
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let entry = kv_entries::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        KvEntries::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entries::Column::Key)
                    .update_columns([kv_entries::Column::Value, kv_entries::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        KvEntries::delete_by_id(key.to_string())
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        tracing::debug!(key, "Removed stored value");
        Ok(())
    }
}
