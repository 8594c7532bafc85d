use reqwest::multipart::{Form, Part};

use crate::backend::FormPart;
use crate::errors::{GreenSysError, Result};

/// 把收集到的表单字段重新组装为 multipart 请求体
pub fn build_form(parts: Vec<FormPart>) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        let FormPart {
            name,
            file_name,
            content_type,
            data,
        } = part;

        form = match file_name {
            None => {
                let text = String::from_utf8(data).map_err(|_| {
                    GreenSysError::validation(format!("Form field '{name}' is not valid UTF-8"))
                })?;
                form.text(name, text)
            }
            Some(file_name) => {
                let mut file = Part::bytes(data).file_name(file_name);
                if let Some(ct) = content_type {
                    file = file.mime_str(&ct).map_err(|_| {
                        GreenSysError::validation(format!("Invalid content type '{ct}'"))
                    })?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_content_type() {
        let parts = vec![FormPart {
            name: "foto".into(),
            file_name: Some("a.png".into()),
            content_type: Some("not a mime".into()),
            data: vec![1, 2, 3],
        }];
        assert!(build_form(parts).is_err());
    }

    #[test]
    fn test_builds_mixed_form() {
        let parts = vec![
            FormPart::text("nama", "Sari"),
            FormPart {
                name: "foto".into(),
                file_name: Some("sari.png".into()),
                content_type: Some("image/png".into()),
                data: vec![0x89, 0x50],
            },
        ];
        let form = build_form(parts).unwrap();
        assert!(!form.boundary().is_empty());
    }
}
