use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

// Language requested for plant names and descriptions.
pub const PLANT_LANGUAGE: &str = "en";

// Plant detail categories requested on every call.
pub const PLANT_DETAILS: &[&str] = &[
    "common_names",
    "url",
    "wiki_description",
    "taxonomy",
    "rank",
    "gbif_id",
    "inaturalist_id",
    "synonyms",
    "edible_parts",
    "watering",
    "propagation_methods",
];

// Disease detail categories requested on every call.
pub const DISEASE_DETAILS: &[&str] = &[
    "common_names",
    "description",
    "treatment",
    "classification",
    "symptoms",
    "causes",
    "prevention",
];

// Payload sent to the identification service. Serde derives stay on the domain
// shapes so the client can post them without a separate DTO.
#[derive(Debug, Clone, Serialize)]
pub struct IdentificationRequest {
    pub images: Vec<String>,
    pub plant_language: &'static str,
    pub plant_details: &'static [&'static str],
    pub disease_details: &'static [&'static str],
}

impl IdentificationRequest {
    // Build the request for a single, already cleaned base64 image.
    pub fn for_image(base64_data: String) -> Self {
        Self {
            images: vec![base64_data],
            plant_language: PLANT_LANGUAGE,
            plant_details: PLANT_DETAILS,
            disease_details: DISEASE_DETAILS,
        }
    }
}

// Raw response from the identification service. Every field is optional; the
// normalizer decides what a missing value turns into.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamIdentification {
    pub suggestions: Option<Vec<Suggestion>>,
    pub health_assessment: Option<HealthAssessment>,
}

// One ranked candidate plant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Suggestion {
    pub probability: Option<f64>,
    pub plant_name: Option<String>,
    pub plant_details: Option<PlantDetails>,
    pub similar_images: Option<Vec<Value>>,
}

// List entries may be null upstream; they are kept as `None` rather than
// failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlantDetails {
    pub common_names: Option<Vec<Option<String>>>,
    pub taxonomy: Option<Value>,
    pub wiki_description: Option<TextValue>,
    pub watering: Option<Watering>,
    pub propagation_methods: Option<Vec<Option<String>>>,
    pub edible_parts: Option<Vec<Option<String>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextValue {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Watering {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthAssessment {
    pub diseases: Option<Vec<Disease>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Disease {
    pub name: Option<String>,
    pub probability: Option<f64>,
    pub description: Option<String>,
    pub treatment: Option<Vec<Option<String>>>,
    pub prevention: Option<Vec<Option<String>>>,
}

// Simplified identification returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    pub confidence: String,
    pub plant_type: String,
    pub common_names: String,
    // No fallback here: an unnamed plant simply omits the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    pub taxonomy: Value,
    pub description: String,
    pub care_instructions: CareInstructions,
    pub diseases: Vec<DiseaseSummary>,
    pub similar_images: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareInstructions {
    pub watering: String,
    pub propagation: String,
    pub edible_parts: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub probability: String,
    pub description: String,
    pub treatment: String,
    pub prevention: String,
}

// The use case depends on this trait, not the concrete HTTP client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait PlantIdentifier: Send + Sync {
    async fn identify(
        &self,
        req: IdentificationRequest,
    ) -> Result<UpstreamIdentification, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl<T> PlantIdentifier for Arc<T>
where
    T: PlantIdentifier + ?Sized,
{
    async fn identify(
        &self,
        req: IdentificationRequest,
    ) -> Result<UpstreamIdentification, Box<dyn std::error::Error + Send + Sync>> {
        (**self).identify(req).await
    }
}
