use std::fmt;

// Domain-level errors for the identify workflow.
#[derive(Debug)]
pub enum IdentifyError {
    // The request carried no image data.
    MissingInput,
    // Anything that went wrong while calling or decoding the upstream service.
    UpstreamFailure(String),
}

impl fmt::Display for IdentifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifyError::MissingInput => write!(f, "image data is required"),
            IdentifyError::UpstreamFailure(detail) => write!(f, "upstream failure: {detail}"),
        }
    }
}

impl std::error::Error for IdentifyError {}
