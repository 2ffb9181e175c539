//! Response formatting instructions for answer-generation prompts.
//!
//! The core is [`get_response_type_instructions`]; the HTTP layer serves the
//! same registry to out-of-process callers.

pub mod config;
pub mod errors;
pub mod response_types;
pub mod routes;
pub mod state;

pub use response_types::prompts::DEFAULT_INSTRUCTIONS;
pub use response_types::registry::{
    get_response_type_instructions, response_type_registry, ResponseType, ResponseTypeRegistry,
};
