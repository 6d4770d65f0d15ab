pub mod filter;
pub mod gemini;
pub mod traits;
pub mod types;
pub mod view_model;

pub use filter::{filter_properties, FilterState, ANY};
pub use gemini::GeminiExtractor;
pub use traits::IntentExtractor;
pub use types::{ExtractedIntent, ZonePolicy};
pub use view_model::{SearchOutcome, SearchTicket, View, ViewModel};
