use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use brand_registry_db::models::account::UserProfileModel;
use brand_registry_db::models::IndexAware;
use brand_registry_db::repository::{Create, Load, Update};
use sqlx::Postgres;
use uuid::Uuid;

use super::repo_impl::UserProfileRepositoryImpl;
use crate::utils::{map_db_err, map_row_err, TryFromRow};

#[async_trait]
impl Load<Postgres, UserProfileModel> for UserProfileRepositoryImpl {
    async fn load(&self, id: Uuid) -> RegistryResult<UserProfileModel> {
        let row = sqlx::query("SELECT * FROM user_profile WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("load user profile", e))?
            .ok_or_else(|| RegistryError::NotFound(format!("user profile {id}")))?;

        UserProfileModel::try_from_row(&row).map_err(|e| map_row_err("load user profile", e))
    }
}

#[async_trait]
impl Create<Postgres, UserProfileModel> for UserProfileRepositoryImpl {
    async fn create(&self, item: &UserProfileModel) -> RegistryResult<()> {
        let idx = item.to_index();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_err("create user profile", e))?;

        sqlx::query(
            r#"
            INSERT INTO user_profile
            (id, auth_user_id, username, email, first_name, last_name, role, phone, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.id)
        .bind(item.auth_user_id)
        .bind(item.username.as_str())
        .bind(item.email.as_str())
        .bind(item.first_name.as_str())
        .bind(item.last_name.as_str())
        .bind(item.role)
        .bind(item.phone.as_deref())
        .bind(item.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("create user profile", e))?;

        sqlx::query(
            "INSERT INTO user_profile_idx (id, username_hash, email_hash) VALUES ($1, $2, $3)",
        )
        .bind(idx.id)
        .bind(idx.username_hash)
        .bind(idx.email_hash)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("create user profile index", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_err("create user profile", e))?;

        self.idx_cache.write().add(idx);
        Ok(())
    }
}

#[async_trait]
impl Update<Postgres, UserProfileModel> for UserProfileRepositoryImpl {
    async fn update(&self, item: &UserProfileModel) -> RegistryResult<()> {
        let idx = item.to_index();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_err("update user profile", e))?;

        let result = sqlx::query(
            r#"
            UPDATE user_profile SET
                username = $2, email = $3, first_name = $4, last_name = $5, role = $6, phone = $7
            WHERE id = $1
            "#,
        )
        .bind(item.id)
        .bind(item.username.as_str())
        .bind(item.email.as_str())
        .bind(item.first_name.as_str())
        .bind(item.last_name.as_str())
        .bind(item.role)
        .bind(item.phone.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_err("update user profile", e))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(format!("user profile {}", item.id)));
        }

        sqlx::query("UPDATE user_profile_idx SET username_hash = $2, email_hash = $3 WHERE id = $1")
            .bind(idx.id)
            .bind(idx.username_hash)
            .bind(idx.email_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_err("update user profile index", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_err("update user profile", e))?;

        self.idx_cache.write().add(idx);
        Ok(())
    }
}
