use super::calendar_date::CalendarDate;

/// Errors raised by the week calendar domain
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date '{input}': expected a real date formatted as yyyy-MM-dd")]
    InvalidDateFormat { input: String },
    #[error("Invalid range: minimum date {min} is after maximum date {max}")]
    InvalidRange { min: CalendarDate, max: CalendarDate },
    #[error("Window would need more than {cap} weeks")]
    NonTerminatingBound { cap: u32 },
    #[error("Index {index} is outside the materialized window of {len} days")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("First day of week must be between 0 and 6, got {0}")]
    InvalidFirstDay(u8),
    #[error("Cannot snap offset {offset} with item width {width}")]
    InvalidSnapGeometry { offset: f64, width: f64 },
}

pub type CalendarResult<T> = Result<T, CalendarError>;
