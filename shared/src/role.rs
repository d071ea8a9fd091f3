use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// 用户角色
///
/// 菜单按角色划分。服务人员角色在不同版本中写作 `SERWISANT` 或 `SERVICEUSER`，两者等价。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Operator,
    Admin,
    Superuser,
    #[serde(rename = "SERWISANT", alias = "SERVICEUSER")]
    ServiceUser,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Operator,
        Role::Admin,
        Role::Superuser,
        Role::ServiceUser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Operator => "OPERATOR",
            Role::Admin => "ADMIN",
            Role::Superuser => "SUPERUSER",
            Role::ServiceUser => "SERWISANT",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPERATOR" => Ok(Role::Operator),
            "ADMIN" => Ok(Role::Admin),
            "SUPERUSER" => Ok(Role::Superuser),
            "SERWISANT" | "SERVICEUSER" => Ok(Role::ServiceUser),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 会话状态（仅内存，无令牌、无过期）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub username: String,
    pub role: Role,
    pub is_authenticated: bool,
}

impl UserSession {
    pub fn authenticated(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            is_authenticated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_role_aliases() {
        assert_eq!("SERWISANT".parse::<Role>(), Ok(Role::ServiceUser));
        assert_eq!("serviceuser".parse::<Role>(), Ok(Role::ServiceUser));
        assert!("GUEST".parse::<Role>().is_err());

        let role: Role = serde_json::from_str("\"SERVICEUSER\"").unwrap();
        assert_eq!(role, Role::ServiceUser);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"SERWISANT\"");
    }
}
