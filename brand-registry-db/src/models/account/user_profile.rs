use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{Identifiable, Index, IndexAware};
use crate::utils::hash_as_i64;
use crate::{HasPrimaryKey, Indexable};

/// Database model for user role enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "PascalCase")]
pub enum Role {
    Administrator,
    Staff,
    Inspector,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Administrator => write!(f, "Administrator"),
            Role::Staff => write!(f, "Staff"),
            Role::Inspector => write!(f, "Inspector"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrator" => Ok(Role::Administrator),
            "Staff" => Ok(Role::Staff),
            "Inspector" => Ok(Role::Inspector),
            _ => Err(()),
        }
    }
}

/// Database model for a user profile
///
/// # Documentation
/// - One-to-one with an authentication identity (`auth_user_id`); the
///   credential itself lives with the authentication collaborator.
/// - Username and email are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileModel {
    pub id: Uuid,

    /// Authentication identity this profile belongs to.
    pub auth_user_id: Uuid,

    pub username: HeaplessString<50>,
    pub email: HeaplessString<100>,
    pub first_name: HeaplessString<100>,
    pub last_name: HeaplessString<100>,

    pub role: Role,
    pub phone: Option<HeaplessString<30>>,
    pub created_at: DateTime<Utc>,
}

impl UserProfileModel {
    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }
}

impl Identifiable for UserProfileModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Index model for UserProfile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileIdxModel {
    pub id: Uuid,
    pub username_hash: Option<i64>,
    pub email_hash: Option<i64>,
}

impl HasPrimaryKey for UserProfileIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl IndexAware for UserProfileModel {
    type IndexType = UserProfileIdxModel;

    fn to_index(&self) -> Self::IndexType {
        UserProfileIdxModel {
            id: self.id,
            username_hash: hash_as_i64(&self.username.as_str()).ok(),
            email_hash: hash_as_i64(&self.email.as_str()).ok(),
        }
    }
}

impl Identifiable for UserProfileIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for UserProfileIdxModel {}

impl Indexable for UserProfileIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("username_hash".to_string(), self.username_hash);
        keys.insert("email_hash".to_string(), self.email_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        HashMap::new()
    }
}

pub type UserProfileIdxModelCache = crate::IdxModelCache<UserProfileIdxModel>;
