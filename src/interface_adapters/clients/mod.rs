pub mod plant_id;

pub use plant_id::{PlantIdClient, PlantIdClientError};
