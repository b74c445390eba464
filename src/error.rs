/// Errors of the configuration surface. Mining itself cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FimError {
    #[error("unknown algorithm {0:?}, expected one of apriori, fp-growth, eclat, relim")]
    UnknownAlgorithm(String),

    #[error("minimum support ratio {0} is outside [0, 1]")]
    SupportOutOfRange(f32),
}
