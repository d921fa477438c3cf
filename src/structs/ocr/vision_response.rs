use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct VisionAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<VisionImageResponse>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisionImageResponse {
    #[serde(default)]
    pub text_annotations: Vec<VisionTextAnnotation>,
    #[serde(default)]
    pub error: Option<VisionStatus>,
}

#[derive(Debug, Deserialize)]
pub struct VisionTextAnnotation {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct VisionStatus {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
