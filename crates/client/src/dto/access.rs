use serde::{Deserialize, Deserializer, Serialize};

use erpdesk_auth::session::role_name;
use erpdesk_auth::{Permission, PermissionRecord, Role, RoleInput, RoleRecord, Session, User};
use erpdesk_core::RecordId;

/// Permission lists come as names (`["customers.view"]`) or as objects
/// (`[{"id": 1, "name": "customers.view"}]`).
fn permission_names<'de, D>(deserializer: D) -> Result<Vec<Permission>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PermissionLike {
        Name(String),
        Object(Named),
    }

    let raw = Option::<Vec<PermissionLike>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|p| match p {
            PermissionLike::Name(name) => Permission::new(name),
            PermissionLike::Object(named) => Permission::new(named.name),
        })
        .collect())
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserWire {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "role_name")]
    pub role: Option<Role>,
    pub avatar_url: Option<String>,
    avatar: Option<String>,
    pub company_id: Option<RecordId>,
    tenant_id: Option<RecordId>,
    #[serde(default, deserialize_with = "permission_names")]
    pub permissions: Vec<Permission>,
}

impl From<UserWire> for User {
    fn from(w: UserWire) -> Self {
        Self {
            id: w.id,
            name: w.name,
            email: w.email,
            role: w.role,
            avatar_url: w.avatar_url.or(w.avatar),
            company_id: w.company_id.or(w.tenant_id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LoginResponseRaw")]
pub struct LoginResponseWire {
    pub token: String,
    pub user: UserWire,
    pub permissions: Vec<Permission>,
}

/// Some auth backends send `access_token` next to `token`; `token` wins.
#[derive(Deserialize)]
struct LoginResponseRaw {
    token: Option<String>,
    access_token: Option<String>,
    user: UserWire,
    #[serde(default, deserialize_with = "permission_names")]
    permissions: Vec<Permission>,
}

impl TryFrom<LoginResponseRaw> for LoginResponseWire {
    type Error = &'static str;

    fn try_from(raw: LoginResponseRaw) -> Result<Self, Self::Error> {
        Ok(Self {
            token: raw.token.or(raw.access_token).ok_or("login response without a token")?,
            user: raw.user,
            permissions: raw.permissions,
        })
    }
}

impl From<LoginResponseWire> for Session {
    fn from(w: LoginResponseWire) -> Self {
        // Permissions may sit next to the token or inside the user.
        let mut permissions = w.permissions;
        if permissions.is_empty() {
            permissions = w.user.permissions.clone();
        }
        permissions.sort();
        permissions.dedup();

        Self {
            token: w.token,
            user: w.user.into(),
            permissions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleWire {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "permission_names")]
    pub permissions: Vec<Permission>,
}

impl From<RoleWire> for RoleRecord {
    fn from(w: RoleWire) -> Self {
        Self {
            id: w.id,
            name: Role::new(w.name),
            description: w.description,
            permissions: w.permissions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RolePayload {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

impl From<&RoleInput> for RolePayload {
    fn from(i: &RoleInput) -> Self {
        Self {
            name: i.name.trim().to_string(),
            description: i.description.clone(),
            permissions: i.permissions.iter().map(|p| p.as_str().to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionWire {
    pub id: RecordId,
    pub name: String,
    pub group: Option<String>,
    module: Option<String>,
    group_name: Option<String>,
}

impl From<PermissionWire> for PermissionRecord {
    fn from(w: PermissionWire) -> Self {
        let name = Permission::new(w.name);
        let group = w
            .group
            .or(w.group_name)
            .or(w.module)
            .or_else(|| Some(name.group().to_string()).filter(|g| !g.is_empty()));
        Self { id: w.id, name, group }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_with_permissions_inside_user() {
        let wire: LoginResponseWire = serde_json::from_value(json!({
            "access_token": "tok-1",
            "user": {
                "id": 1,
                "name": "Sam",
                "email": "sam@shop.test",
                "role": {"id": 2, "name": "cashier"},
                "avatar": "a.png",
                "permissions": [{"id": 1, "name": "sales.create"}, "customers.view", "sales.create"]
            }
        }))
        .unwrap();

        let session = Session::from(wire);
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.role(), Some(&Role::new("cashier")));
        assert_eq!(session.user.avatar_url.as_deref(), Some("a.png"));
        assert_eq!(
            session.permissions,
            vec![Permission::new("customers.view"), Permission::new("sales.create")]
        );
    }

    #[test]
    fn top_level_permissions_win() {
        let wire: LoginResponseWire = serde_json::from_value(json!({
            "token": "t",
            "user": {"id": 1, "name": "A", "email": "a@x.io", "role": "super_admin", "permissions": ["x.y"]},
            "permissions": ["a.b"]
        }))
        .unwrap();
        assert_eq!(Session::from(wire).permissions, vec![Permission::new("a.b")]);
    }

    #[test]
    fn token_and_access_token_together() {
        let wire: LoginResponseWire = serde_json::from_value(json!({
            "token": "t-1",
            "access_token": "t-2",
            "user": {"id": 1, "name": "A", "email": "a@x.io", "tenant_id": 4, "company_id": 3}
        }))
        .unwrap();
        let session = Session::from(wire);
        assert_eq!(session.token, "t-1");
        assert_eq!(session.user.company_id, Some(RecordId::from(3u64)));

        let missing = serde_json::from_value::<LoginResponseWire>(json!({"user": {"id": 1, "name": "A", "email": "a@x.io"}}));
        assert!(missing.is_err());
    }

    #[test]
    fn permission_group_falls_back_to_prefix() {
        let record = PermissionRecord::from(
            serde_json::from_value::<PermissionWire>(json!({"id": 1, "name": "stock_transfers.approve"})).unwrap(),
        );
        assert_eq!(record.group.as_deref(), Some("stock_transfers"));
    }
}
