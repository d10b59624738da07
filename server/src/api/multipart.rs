//! Reading multipart forms that carry one file plus text fields.

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::ApiError;

#[derive(Debug)]
pub struct FilePart {
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Default)]
pub struct Form {
    pub file: Option<FilePart>,
    pub fields: HashMap<String, String>,
}

impl Form {
    /// A trimmed, non-empty text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require_file(self) -> Result<(FilePart, HashMap<String, String>), ApiError> {
        match self.file {
            Some(file) => Ok((file, self.fields)),
            None => Err(ApiError::Validation("No file provided".to_string())),
        }
    }
}

/// Collect the part named `file_field` as the file and every other part as text.
pub async fn read_form(mut multipart: Multipart, file_field: &str) -> Result<Form, ApiError> {
    let mut form = Form::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == file_field {
            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await?.to_vec();
            form.file = Some(FilePart {
                data,
                filename,
                content_type,
            });
        } else {
            let value = field.text().await?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}
