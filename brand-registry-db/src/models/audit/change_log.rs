use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::audit::entity_kind::{ChangeAction, EntityKind};
use crate::models::Identifiable;
use crate::utils::hash_as_i64;

/// # Documentation
/// - Append-only audit entry: one per mutating operation, written after the
///   primary write commits.
/// - Entries are never updated or deleted; the repository exposes append and
///   read operations only.
/// - `snapshot_hash` is the stable hash of the JSON snapshot, giving each
///   entry tamper evidence on its payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeLogModel {
    pub id: Uuid,

    pub entity_kind: EntityKind,
    pub entity_id: Uuid,
    pub action: ChangeAction,

    /// Acting user profile, when the operation had one (registration has none).
    pub actor_id: Option<Uuid>,
    pub recorded_at: DateTime<Utc>,

    pub snapshot: serde_json::Value,
    pub snapshot_hash: i64,
}

impl ChangeLogModel {
    /// Build an entry for one mutation, stamping the snapshot hash.
    pub fn record(
        entity_kind: EntityKind,
        entity_id: Uuid,
        action: ChangeAction,
        actor_id: Option<Uuid>,
        recorded_at: DateTime<Utc>,
        snapshot: serde_json::Value,
    ) -> Self {
        let snapshot_hash = hash_as_i64(&snapshot).unwrap_or(0);
        Self {
            id: Uuid::new_v4(),
            entity_kind,
            entity_id,
            action,
            actor_id,
            recorded_at,
            snapshot,
            snapshot_hash,
        }
    }
}

impl Identifiable for ChangeLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_stamps_a_stable_snapshot_hash() {
        let entity_id = Uuid::new_v4();
        let now = Utc::now();
        let snapshot = json!({"order_number": 42, "state": "Active"});

        let a = ChangeLogModel::record(
            EntityKind::Mark,
            entity_id,
            ChangeAction::Created,
            None,
            now,
            snapshot.clone(),
        );
        let b = ChangeLogModel::record(
            EntityKind::Mark,
            entity_id,
            ChangeAction::Created,
            None,
            now,
            snapshot,
        );

        assert_eq!(a.snapshot_hash, b.snapshot_hash);
        assert_ne!(a.id, b.id);
        assert_ne!(
            a.snapshot_hash,
            ChangeLogModel::record(
                EntityKind::Mark,
                entity_id,
                ChangeAction::Created,
                None,
                now,
                serde_json::json!({"order_number": 43}),
            )
            .snapshot_hash
        );
    }
}
