use chrono::Utc;
use serde::Serialize;
use sqlx::Database;
use uuid::Uuid;

use crate::models::audit::{ChangeAction, ChangeLogModel, EntityKind};
use crate::repository::ChangeLogRepository;

/// JSON snapshot of an entity for the change log.
pub(crate) fn snapshot_of<T: Serialize>(entity: &T) -> serde_json::Value {
    serde_json::to_value(entity).unwrap_or(serde_json::Value::Null)
}

/// Append a change-log entry after the primary write has committed. A failed
/// append is logged and swallowed; the user-visible operation already
/// succeeded.
pub(crate) async fn record<DB: Database>(
    change_log: &dyn ChangeLogRepository<DB>,
    entity_kind: EntityKind,
    entity_id: Uuid,
    action: ChangeAction,
    actor_id: Option<Uuid>,
    snapshot: serde_json::Value,
) {
    let entry = ChangeLogModel::record(entity_kind, entity_id, action, actor_id, Utc::now(), snapshot);
    if let Err(error) = change_log.append(&entry).await {
        tracing::warn!(%entity_kind, %entity_id, %error, "change log append failed");
    }
}
