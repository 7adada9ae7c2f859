use crate::domain::{IdentificationRequest, IdentificationResult, IdentifyError, PlantIdentifier};
use crate::use_cases::normalize::normalize;

// Identify use case with the upstream service injected.
pub struct IdentifyPlantUseCase<P> {
    pub identifier: P,
}

impl<P> IdentifyPlantUseCase<P>
where
    P: PlantIdentifier,
{
    pub async fn execute(
        &self,
        base64_image: Option<String>,
    ) -> Result<IdentificationResult, IdentifyError> {
        let image = base64_image
            .filter(|image| !image.is_empty())
            .ok_or(IdentifyError::MissingInput)?;

        let request = IdentificationRequest::for_image(strip_data_uri_prefix(&image).to_string());

        let upstream = self
            .identifier
            .identify(request)
            .await
            .map_err(|err| IdentifyError::UpstreamFailure(err.to_string()))?;

        Ok(normalize(upstream))
    }
}

// Drop a leading `data:image/<fmt>;base64,` so only the payload is forwarded.
// Anything that does not match exactly is returned untouched.
pub fn strip_data_uri_prefix(image: &str) -> &str {
    let Some(rest) = image.strip_prefix("data:image/") else {
        return image;
    };

    let format_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if format_len == 0 {
        return image;
    }

    rest[format_len..].strip_prefix(";base64,").unwrap_or(image)
}
