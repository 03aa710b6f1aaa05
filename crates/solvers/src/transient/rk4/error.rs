/// Errors that can occur during RK4 integration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: step count must be non-negative, got {steps}")]
    InvalidArgument { steps: i64 },

    #[error("non-finite value at step {step} (t = {time})")]
    NonFinite { step: usize, time: f64 },
}
