use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VisionAnnotateRequest {
    pub requests: Vec<VisionImageRequest>,
}

#[derive(Debug, Serialize)]
pub struct VisionImageRequest {
    pub image: VisionImage,
    pub features: Vec<VisionFeature>,
}

#[derive(Debug, Serialize)]
pub struct VisionImage {
    /// Base64-encoded image bytes.
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct VisionFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
}

impl VisionAnnotateRequest {
    pub fn text_detection(encoded_image: String) -> Self {
        Self {
            requests: vec![VisionImageRequest {
                image: VisionImage { content: encoded_image },
                features: vec![VisionFeature { feature_type: "TEXT_DETECTION".to_string() }],
            }],
        }
    }
}
