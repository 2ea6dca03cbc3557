use serde::{Deserialize, Deserializer, Serialize};

use erpdesk_core::{Entity, RecordId};

use crate::{Permission, Role};

/// The signed-in user, in dashboard shape.
///
/// Stored under the `user` storage key. The role is read leniently: older
/// sessions stored the whole role object (`{"name": "admin"}`) rather than
/// its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "role_name")]
    pub role: Option<Role>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub company_id: Option<RecordId>,
}

impl Entity for User {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Deserialize a role given either as `"admin"` or as `{ "name": "admin", ... }`.
pub fn role_name<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RoleLike {
        Name(String),
        Object(Named),
    }

    Ok(match Option::<RoleLike>::deserialize(deserializer)? {
        Some(RoleLike::Name(name)) if !name.is_empty() => Some(Role::new(name)),
        Some(RoleLike::Object(named)) if !named.name.is_empty() => Some(Role::new(named.name)),
        _ => None,
    })
}

/// What a successful login leaves behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub permissions: Vec<Permission>,
}

impl Session {
    pub fn role(&self) -> Option<&Role> {
        self.user.role.as_ref()
    }
}
