use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Database model for the entity kind a change-log entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "entity_kind", rename_all = "PascalCase")]
pub enum EntityKind {
    Producer,
    Parcel,
    Mark,
    PredefinedImage,
    Request,
    UserProfile,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Producer => write!(f, "Producer"),
            EntityKind::Parcel => write!(f, "Parcel"),
            EntityKind::Mark => write!(f, "Mark"),
            EntityKind::PredefinedImage => write!(f, "PredefinedImage"),
            EntityKind::Request => write!(f, "Request"),
            EntityKind::UserProfile => write!(f, "UserProfile"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Producer" => Ok(EntityKind::Producer),
            "Parcel" => Ok(EntityKind::Parcel),
            "Mark" => Ok(EntityKind::Mark),
            "PredefinedImage" => Ok(EntityKind::PredefinedImage),
            "Request" => Ok(EntityKind::Request),
            "UserProfile" => Ok(EntityKind::UserProfile),
            _ => Err(()),
        }
    }
}

/// Database model for the recorded change action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "change_action", rename_all = "PascalCase")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
    StateChanged,
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeAction::Created => write!(f, "Created"),
            ChangeAction::Updated => write!(f, "Updated"),
            ChangeAction::Deleted => write!(f, "Deleted"),
            ChangeAction::StateChanged => write!(f, "StateChanged"),
        }
    }
}

impl FromStr for ChangeAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(ChangeAction::Created),
            "Updated" => Ok(ChangeAction::Updated),
            "Deleted" => Ok(ChangeAction::Deleted),
            "StateChanged" => Ok(ChangeAction::StateChanged),
            _ => Err(()),
        }
    }
}
