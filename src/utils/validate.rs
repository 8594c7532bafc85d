use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("Invalid url regex"));

// 路径中的资源标识：数字 ID 或 UUID
static RESOURCE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{1,64}$").expect("Invalid resource id regex"));

const PASSWORD_MIN_LEN: usize = 6;

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    let len = username.chars().count();
    if !(3..=32).contains(&len) {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 6 characters long");
    }
    if password.trim().is_empty() {
        return Err("Password must not be blank");
    }
    Ok(())
}

pub fn validate_http_url(url: &str) -> Result<(), &'static str> {
    if !HTTP_URL_RE.is_match(url) {
        return Err("URL must be an absolute http(s) address");
    }
    Ok(())
}

pub fn is_valid_resource_id(id: &str) -> bool {
    RESOURCE_ID_RE.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("sari.dewi").is_ok());
        assert!(validate_username("guru_01").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("sari dewi").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("admin@greensys.sch.id").is_ok());
        assert!(validate_email("admin@greensys").is_err());
        assert!(validate_email("admin.greensys.id").is_err());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("rahasia").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("       ").is_err());
    }

    #[test]
    fn test_http_url() {
        assert!(validate_http_url("https://storage.greensys.id/cert/1.pdf").is_ok());
        assert!(validate_http_url("http://localhost:5000/files/a.pdf").is_ok());
        assert!(validate_http_url("ftp://x/a.pdf").is_err());
        assert!(validate_http_url("https:// spaced").is_err());
    }

    #[test]
    fn test_resource_id() {
        assert!(is_valid_resource_id("42"));
        assert!(is_valid_resource_id("4f1c2a9e-8b7d-4e2f-9c1a-0d3b5e6f7a8b"));
        assert!(!is_valid_resource_id("../etc"));
        assert!(!is_valid_resource_id(""));
    }
}
