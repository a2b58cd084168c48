use serde::{Deserialize, Serialize};

use super::UploadedImage;

/// Hosted image reference inside the service response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedImageRef {
    pub url: String,
}

/// Payload of a successful upload: `data` in the wire response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadData {
    pub image: HostedImageRef,
    pub title: String,
    pub size: i64,
}

/// Wire response from the upload endpoint.
///
/// `data` is absent when `success` is false; extra fields the service sends
/// (thumbnails, delete URLs, error details) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<UploadData>,
    #[serde(default)]
    pub status: Option<u16>,
}

impl UploadResponse {
    /// Build the fully populated display model, or None when the response
    /// does not carry a complete payload.
    pub fn into_uploaded_image(self) -> Option<UploadedImage> {
        if !self.success {
            return None;
        }
        self.data.map(|data| UploadedImage {
            url: data.image.url,
            title: data.title,
            size_bytes: data.size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_success_response() {
        let json = r#"{
            "success": true,
            "status": 200,
            "data": {
                "title": "sunset",
                "size": 123456,
                "image": { "url": "https://i.example.com/abc.png" },
                "delete_url": "https://example.com/delete/abc"
            }
        }"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        let uploaded = response.into_uploaded_image().unwrap();
        assert_eq!(uploaded.url, "https://i.example.com/abc.png");
        assert_eq!(uploaded.title, "sunset");
        assert_eq!(uploaded.size_bytes, 123456);
    }

    #[test]
    fn parse_failure_response_without_data() {
        let json = r#"{"success": false, "status": 400}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.clone().into_uploaded_image().is_none());
    }

    #[test]
    fn success_without_payload_is_not_uploaded() {
        let response = UploadResponse {
            success: true,
            data: None,
            status: Some(200),
        };
        assert!(response.into_uploaded_image().is_none());
    }
}
