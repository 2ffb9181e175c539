// Response type catalogue: formatting instructions keyed by response type name.
// Prompt assembly happens in the caller; this module only hands out the text.

pub mod handlers;
pub mod prompts;
pub mod registry;
