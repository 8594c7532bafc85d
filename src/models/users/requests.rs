use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::UserRole;
use crate::errors::{GreenSysError, Result};
use crate::utils::validate::{validate_email, validate_password, validate_username};

// 用户创建请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf_password: Option<String>,
    pub role: UserRole,
}

// 用户更新请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

fn check_role(role: UserRole) -> Result<()> {
    if role == UserRole::Unknown {
        return Err(GreenSysError::validation(
            "Role must be one of: admin, guru, siswa",
        ));
    }
    Ok(())
}

fn check_password(password: &str, confirmation: Option<&str>) -> Result<()> {
    validate_password(password).map_err(GreenSysError::validation)?;
    if let Some(conf) = confirmation
        && conf != password
    {
        return Err(GreenSysError::validation(
            "Password and confirmation do not match",
        ));
    }
    Ok(())
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        validate_username(&self.username).map_err(GreenSysError::validation)?;
        validate_email(&self.email).map_err(GreenSysError::validation)?;
        check_password(&self.password, self.conf_password.as_deref())?;
        check_role(self.role)
    }
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(username) = &self.username {
            validate_username(username).map_err(GreenSysError::validation)?;
        }
        if let Some(email) = &self.email {
            validate_email(email).map_err(GreenSysError::validation)?;
        }
        // 空密码表示不修改
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            check_password(password, self.conf_password.as_deref())?;
        }
        if let Some(role) = self.role {
            check_role(role)?;
        }
        Ok(())
    }

    /// 密码留空表示不修改，转发前去掉
    pub fn without_blank_password(mut self) -> Self {
        if self.password.as_deref().is_some_and(|p| p.is_empty()) {
            self.password = None;
            self.conf_password = None;
        }
        self
    }
}
