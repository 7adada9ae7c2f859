// Domain layer: identification shapes, errors and the upstream port.

pub mod errors;
pub mod identification;

pub use errors::IdentifyError;
pub use identification::{
    CareInstructions, DiseaseSummary, IdentificationRequest, IdentificationResult,
    PlantIdentifier, UpstreamIdentification,
};
