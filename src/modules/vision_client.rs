use std::time::Duration;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::annotation::normalizer::RawFaceAnnotation;
use crate::config::config::VisionConfig;
use crate::error::{EmotionError, Result};
use crate::utils::image::{encode_image, strip_data_url};

pub const FACE_DETECTION: &str = "FACE_DETECTION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub max_results: u32,
    #[serde(rename = "type")]
    pub feature_type: String,
}

impl VisionRequest {
    /// face_detection builds a single face detection request for a base64 image.
    pub fn face_detection(content: impl Into<String>, max_results: u32) -> Self {
        VisionRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent { content: content.into() },
                features: vec![Feature {
                    max_results,
                    feature_type: FACE_DETECTION.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub face_annotations: Vec<RawFaceAnnotation>,
    #[serde(default)]
    pub error: Option<ProviderStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl VisionResponse {
    /// face_annotations returns the faces of the first response.
    ///
    /// An error object embedded by the provider is surfaced as `UpstreamMessage`.
    pub fn face_annotations(self) -> Result<Vec<RawFaceAnnotation>> {
        let response = match self.responses.into_iter().next() {
            Some(response) => response,
            None => return Ok(vec![]),
        };
        if let Some(status) = response.error {
            return Err(EmotionError::UpstreamMessage(format!("{} (code {})", status.message, status.code)));
        }
        Ok(response.face_annotations)
    }
}

#[derive(Debug, Clone)]
pub struct VisionClient {
    http_client: Client,
    config: VisionConfig,
}

impl VisionClient {
    pub fn new(config: VisionConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(VisionClient { http_client, config })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    pub fn build_request(&self, content: &str) -> VisionRequest {
        VisionRequest::face_detection(strip_data_url(content), self.config.max_results)
    }

    /// detect_faces sends the image bytes to the provider once and returns the raw faces.
    pub async fn detect_faces(&self, im_bytes: &[u8]) -> Result<Vec<RawFaceAnnotation>> {
        self.detect_faces_base64(&encode_image(im_bytes)).await
    }

    pub async fn detect_faces_base64(&self, content: &str) -> Result<Vec<RawFaceAnnotation>> {
        let request = self.build_request(content);

        info!(
            endpoint = %self.config.endpoint,
            payload_len = content.len(),
            "sending face detection request"
        );

        let response = self.http_client
            .post(self.config.request_url())
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!(error = %e, "failed to read error body");
                String::new()
            });
            warn!(status = status.as_u16(), "vision provider returned an error");
            return Err(EmotionError::Upstream { status: status.as_u16(), body });
        }

        let body = response.text().await?;
        let faces = serde_json::from_str::<VisionResponse>(&body)?.face_annotations()?;
        info!(faces = faces.len(), "received face annotations");
        Ok(faces)
    }
}

/// Single-connection HTTP responder for client tests.
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// serve_once answers the next request with `status` and `body`, returning the endpoint url.
    pub(crate) async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    if request.len() >= end + 4 + content_length(&text[..end]) {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{}/v1/images:annotate", addr)
    }
}
