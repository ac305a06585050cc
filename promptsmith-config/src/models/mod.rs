//! Model identification module
//!
//! Centralizes the model identifiers accepted by the compiler and the modality
//! each of them belongs to, so adapter lookup never goes through ad-hoc strings.

mod errors;
mod modality;
mod model_id;

pub use errors::ModelParseError;
pub use modality::Modality;
pub use model_id::ModelId;

#[cfg(test)]
mod tests;
