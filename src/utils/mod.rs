pub mod constants;
pub mod paths;
pub mod progress;

pub use paths::PipelineConfig;
pub use progress::ProgressReporter;
