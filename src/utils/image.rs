use std::path::Path;
use anyhow::{Context, Error};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// encode_image converts raw image bytes to the base64 payload expected by the vision provider.
pub fn encode_image(im_bytes: &[u8]) -> String {
    BASE64.encode(im_bytes)
}

/// strip_data_url drops a `data:<mime>;base64,` prefix, leaving only the payload.
///
/// Input without a data url prefix is returned unchanged.
pub fn strip_data_url(content: &str) -> &str {
    match content.strip_prefix("data:") {
        Some(rest) => match rest.find(',') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        },
        None => content,
    }
}

/// read_image_base64 reads an image file and returns its base64 payload.
pub fn read_image_base64(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let im_bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image {}", path.display()))?;
    Ok(encode_image(&im_bytes))
}

#[cfg(test)]
mod tests {
    use crate::utils::image::{encode_image, read_image_base64, strip_data_url};

    #[test]
    fn test_encode_image() {
        assert_eq!(encode_image(b"\xff\xd8\xff\xe0"), "/9j/4A==");
        assert_eq!(encode_image(&[]), "");
    }

    #[test]
    fn test_strip_data_url() {
        assert_eq!(strip_data_url("data:image/jpeg;base64,/9j/4A=="), "/9j/4A==");
        assert_eq!(strip_data_url("/9j/4A=="), "/9j/4A==");
    }

    #[test]
    fn test_read_image_base64() {
        let path = std::env::temp_dir().join("rs_face_emoji_read_image.jpg");
        std::fs::write(&path, b"\xff\xd8\xff\xe0").unwrap();
        let content = read_image_base64(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(content, "/9j/4A==");

        assert!(read_image_base64("/nonexistent/face.jpg").is_err());
    }
}
