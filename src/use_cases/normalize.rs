use crate::domain::identification::{Disease, PlantDetails, Suggestion};
use crate::domain::{CareInstructions, DiseaseSummary, IdentificationResult, UpstreamIdentification};
use serde_json::{Map, Value};

const UNKNOWN_PLANT: &str = "Unknown plant";
const NO_COMMON_NAMES: &str = "No common names found";
const NO_DESCRIPTION: &str = "No description available";
const DEFAULT_WATERING: &str = "Water regularly as needed";
const DEFAULT_PROPAGATION: &str = "Standard propagation methods apply";
const NO_EDIBLE_PARTS: &str = "No edible parts information available";
const NO_TREATMENT: &str = "No specific treatment information available";
const DEFAULT_PREVENTION: &str = "Follow general plant care guidelines";

// Reshape the upstream payload into the client-facing result, substituting
// fallbacks for anything missing.
pub fn normalize(upstream: UpstreamIdentification) -> IdentificationResult {
    let suggestion = upstream
        .suggestions
        .and_then(|suggestions| suggestions.into_iter().next())
        .unwrap_or_default();
    let Suggestion {
        probability,
        plant_name,
        plant_details,
        similar_images,
    } = suggestion;
    let details = plant_details.unwrap_or_default();

    let diseases = upstream
        .health_assessment
        .and_then(|assessment| assessment.diseases)
        .unwrap_or_default()
        .into_iter()
        .map(summarize_disease)
        .collect();

    IdentificationResult {
        confidence: format_percent(probability),
        plant_type: text_or(plant_name.clone(), UNKNOWN_PLANT),
        common_names: join_or(details.common_names.clone(), ", ", NO_COMMON_NAMES),
        scientific_name: plant_name,
        taxonomy: details
            .taxonomy
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new())),
        description: text_or(
            details.wiki_description.clone().and_then(|wiki| wiki.value),
            NO_DESCRIPTION,
        ),
        care_instructions: care_instructions(details),
        diseases,
        similar_images: similar_images.unwrap_or_default(),
    }
}

fn care_instructions(details: PlantDetails) -> CareInstructions {
    CareInstructions {
        watering: text_or(
            details.watering.and_then(|watering| watering.description),
            DEFAULT_WATERING,
        ),
        propagation: join_or(details.propagation_methods, ", ", DEFAULT_PROPAGATION),
        edible_parts: join_or(details.edible_parts, ", ", NO_EDIBLE_PARTS),
    }
}

fn summarize_disease(disease: Disease) -> DiseaseSummary {
    DiseaseSummary {
        name: disease.name,
        probability: format_percent(disease.probability),
        description: disease.description.unwrap_or_default(),
        treatment: join_or(disease.treatment, ". ", NO_TREATMENT),
        prevention: join_or(disease.prevention, ". ", DEFAULT_PREVENTION),
    }
}

// Fraction in [0, 1] rendered as "NN.NN%". A missing value counts as zero.
pub fn format_percent(fraction: Option<f64>) -> String {
    format!("{}%", two_decimals(fraction.unwrap_or(0.0) * 100.0))
}

// Two-decimal rendering where exact halves round away from zero and negative
// zero prints as "0.00".
fn two_decimals(value: f64) -> String {
    // A third-decimal tie is only representable as an odd multiple of 1/8.
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths.abs() % 2.0 == 1.0;
    if !is_tie {
        // Adding positive zero turns -0.0 into 0.0.
        return format!("{:.2}", value + 0.0);
    }

    let cents = (value.abs() * 100.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

// Null entries join as empty strings.
fn join_or(values: Option<Vec<Option<String>>>, separator: &str, fallback: &str) -> String {
    let joined = values.map(|values| {
        values
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
            .join(separator)
    });
    text_or(joined, fallback)
}
