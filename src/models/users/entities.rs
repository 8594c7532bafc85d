use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::listing::{FieldValue, Listable};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Admin,
    Guru,
    Siswa,
    // 后端返回了无法识别的角色
    Unknown,
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const GURU: &'static str = "guru";
    pub const SISWA: &'static str = "siswa";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => Self::ADMIN,
            UserRole::Guru => Self::GURU,
            UserRole::Siswa => Self::SISWA,
            UserRole::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            UserRole::ADMIN => UserRole::Admin,
            UserRole::GURU => UserRole::Guru,
            UserRole::SISWA => UserRole::Siswa,
            _ => UserRole::Unknown,
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::GURU => Ok(UserRole::Guru),
            UserRole::SISWA => Ok(UserRole::Siswa),
            _ => Err(format!("Invalid user role: {s}. Supported: admin, guru, siswa")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub uuid: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Listable for User {
    const SEARCH_FIELDS: &'static [&'static str] = &["username", "email", "role"];
    const FILTER_FIELDS: &'static [&'static str] = &["role"];
    const SORT_FIELDS: &'static [&'static str] = &["username", "email", "role"];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "username" => FieldValue::opt_text(self.username.as_deref()),
            "email" => FieldValue::opt_text(self.email.as_deref()),
            "role" => FieldValue::opt_text(self.role.as_ref().map(UserRole::as_str)),
            _ => FieldValue::Missing,
        }
    }
}
