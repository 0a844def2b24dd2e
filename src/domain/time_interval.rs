/// A half-open span of audio time in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    start: f64,
    end: f64,
}

impl TimeInterval {
    pub fn new(start: f64, end: f64) -> Result<Self, TimeIntervalError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TimeIntervalError::NotFinite { start, end });
        }
        if start < 0.0 {
            return Err(TimeIntervalError::NegativeStart { start });
        }
        if end <= start {
            return Err(TimeIntervalError::EmptyOrInverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TimeIntervalError {
    #[error("interval bounds must be finite, got [{start}, {end})")]
    NotFinite { start: f64, end: f64 },
    #[error("interval start must be non-negative, got {start}")]
    NegativeStart { start: f64 },
    #[error("interval end must be after start, got [{start}, {end})")]
    EmptyOrInverted { start: f64, end: f64 },
}
