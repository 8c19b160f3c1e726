pub mod print_session;
pub mod readiness;

pub use print_session::{JobSummary, PrintSession};
pub use readiness::ReadinessReport;
