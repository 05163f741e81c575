pub mod record;
pub mod severity;
pub mod subscale;

pub use record::{AssessmentRecord, Response, SubscaleTotal};
pub use severity::Severity;
pub use subscale::Subscale;
