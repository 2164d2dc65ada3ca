//! Builders of chainhook definitions.
//!
//! - `ChainhookBuilder`: validated definition from filters, options and a webhook
//! - `ChainhookOptionsBuilder`: the optional-behavior bag

mod definition;
mod options;

pub use definition::ChainhookBuilder;
pub use options::ChainhookOptionsBuilder;
