use serde::{Deserialize, Serialize};

/// User-editable upload options.
///
/// No local validation: an out-of-range expiration is forwarded verbatim and
/// left to the remote service to reject. An empty name counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub name: String,
    pub expiration: Option<String>,
}

impl UploadOptions {
    /// Name to send, or None when the field is empty.
    pub fn name_if_set(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

/// Fully assembled request for one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub api_key: String,
    pub image_base64: String,
    pub name: Option<String>,
    pub expiration: Option<String>,
}

impl UploadRequest {
    /// Multipart fields in wire order: `key`, `image`, then `name` and
    /// `expiration` only when set. Values are forwarded as entered.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("key", self.api_key.clone()),
            ("image", self.image_base64.clone()),
        ];
        if let Some(name) = &self.name {
            fields.push(("name", name.clone()));
        }
        if let Some(expiration) = &self.expiration {
            fields.push(("expiration", expiration.clone()));
        }
        fields
    }
}

/// A successfully hosted image. Either fully present or absent, never
/// partially populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
    pub title: String,
    pub size_bytes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, expiration: Option<&str>) -> UploadRequest {
        UploadRequest {
            api_key: "k".to_string(),
            image_base64: "aGVsbG8=".to_string(),
            name: name.map(str::to_string),
            expiration: expiration.map(str::to_string),
        }
    }

    #[test]
    fn form_fields_minimal() {
        let fields = request(None, None).form_fields();
        assert_eq!(
            fields,
            vec![
                ("key", "k".to_string()),
                ("image", "aGVsbG8=".to_string())
            ]
        );
    }

    #[test]
    fn form_fields_with_name_and_expiration() {
        let fields = request(Some("sunset"), Some("120")).form_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[2], ("name", "sunset".to_string()));
        // Forwarded as the literal text entered, not coerced.
        assert_eq!(fields[3], ("expiration", "120".to_string()));
    }

    #[test]
    fn options_empty_name_is_unset() {
        let mut options = UploadOptions::default();
        assert_eq!(options.name_if_set(), None);
        options.name = "cat".to_string();
        assert_eq!(options.name_if_set(), Some("cat"));
        options.name.clear();
        assert_eq!(options.name_if_set(), None);
    }
}
