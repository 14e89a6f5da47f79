pub mod resume;

pub use resume::{ResumeRequest, ResumeSubmission};
