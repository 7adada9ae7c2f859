// Use cases layer: the identify workflow and response normalization.

pub mod identify_plant;
pub mod normalize;

#[cfg(test)]
pub(crate) mod test_support;

pub use identify_plant::{IdentifyPlantUseCase, strip_data_uri_prefix};
pub use normalize::normalize;
