pub mod clock;
pub mod prompt;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use service::{ExtractionError, ExtractionResult, ExtractionService};
