//! Error types used throughout lapwatch
//!
//! Each concern has its own enum; [`LapwatchError`] gathers them for callers
//! that drive several components through one `?`.

use lapwatch_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use thiserror::Error;

/// Boxed error returned by user callbacks
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unit registration and conversion errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Invalid unit name: '{name}' is empty, reserved or already registered")]
    InvalidUnitName { name: String },

    #[error("Unsupported operator: '{operator}' (expected one of +, -, *, /)")]
    UnsupportedOperator { operator: String },

    #[error("Division by zero: unit '{name}' cannot use a factor of 0")]
    DivisionByZero { name: String },

    #[error("Unknown unit: '{unit}'")]
    UnknownUnit { unit: String },

    #[error("Cannot convert formatted value '{value}' to another unit")]
    NotNumeric { value: String },
}

impl UnitError {
    /// Whether this error belongs to the unsupported-logic family
    ///
    /// An unsupported operator is the only member: the arithmetic step itself
    /// works on a closed set of operators and cannot fail.
    pub const fn is_unsupported_logic(&self) -> bool {
        matches!(self, Self::UnsupportedOperator { .. })
    }
}

impl ErrorClassification for UnitError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    fn is_critical(&self) -> bool {
        false
    }
}

/// Timer lifecycle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimerError {
    #[error("Timer '{id}' has not been started")]
    TimerNotStarted { id: String },

    #[error("Timer '{id}' is already in use")]
    TimerAlreadyStarted { id: String },

    #[error("Timer '{id}' has already been stopped")]
    NoActiveTimerToStop { id: String },

    #[error("Timer '{id}' is already paused")]
    TimerAlreadyPaused { id: String },

    #[error("Timer '{id}' has no active pause to resume")]
    NoActivePausedTimerToResume { id: String },

    #[error("Timer '{id}' has a pause without a matching resume")]
    UnmatchedPauseWithoutResume { id: String },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl TimerError {
    /// The timer the error refers to, when it refers to one
    pub fn timer_id(&self) -> Option<&str> {
        match self {
            Self::TimerNotStarted { id }
            | Self::TimerAlreadyStarted { id }
            | Self::NoActiveTimerToStop { id }
            | Self::TimerAlreadyPaused { id }
            | Self::NoActivePausedTimerToResume { id }
            | Self::UnmatchedPauseWithoutResume { id } => Some(id),
            Self::Unit(_) => None,
        }
    }
}

impl ErrorClassification for TimerError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnmatchedPauseWithoutResume { .. } => ErrorSeverity::Error,
            Self::Unit(e) => e.severity(),
            _ => ErrorSeverity::Warning,
        }
    }

    fn is_critical(&self) -> bool {
        false
    }
}

/// Errors raised while timing a callback
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The callback failed; the original error is kept as the source
    ///
    /// `elapsed` is `None` when the private timer could not be read back.
    #[error("{message}")]
    Failed {
        message: String,
        elapsed: Option<f64>,
        unit: String,
        #[source]
        source: BoxedError,
    },

    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl ExecutionError {
    /// Elapsed time in the requested unit when the callback failed
    pub fn elapsed(&self) -> Option<(f64, &str)> {
        match self {
            Self::Failed { elapsed: Some(elapsed), unit, .. } => Some((*elapsed, unit.as_str())),
            _ => None,
        }
    }
}

impl From<UnitError> for ExecutionError {
    fn from(err: UnitError) -> Self {
        Self::Timer(TimerError::Unit(err))
    }
}

impl ErrorClassification for ExecutionError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Failed { .. } => ErrorSeverity::Error,
            Self::Timer(e) => e.severity(),
        }
    }

    fn is_critical(&self) -> bool {
        false
    }
}

/// Main error type for lapwatch
#[derive(Error, Debug)]
pub enum LapwatchError {
    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Common(#[from] CommonError),
}

impl ErrorClassification for LapwatchError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Common(e) => e.is_retryable(),
            _ => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unit(e) => e.severity(),
            Self::Timer(e) => e.severity(),
            Self::Execution(e) => e.severity(),
            Self::Common(e) => e.severity(),
        }
    }

    fn is_critical(&self) -> bool {
        match self {
            Self::Common(e) => e.is_critical(),
            _ => false,
        }
    }
}

/// Result type alias for lapwatch operations
pub type Result<T> = std::result::Result<T, LapwatchError>;
