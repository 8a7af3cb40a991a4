//! Progress bookkeeping and time formatting.

/// Time/duration progress of one handle, in seconds.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Progress {
    pub current_time: f64,
    /// `None` while the duration is unknown.
    pub duration: Option<f64>,
}

impl Progress {
    /// Played fraction in `0.0..=1.0`; zero when the duration is unknown.
    pub fn fraction(&self) -> f64 {
        match self.duration {
            Some(d) if d > 0.0 => (self.current_time / d).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Clamp a reported position to a finite, non-negative value.
pub fn clamp_time(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 { secs } else { 0.0 }
}

/// Interpret a reported duration; zero, negative and non-finite mean unknown.
pub fn known_duration(secs: f64) -> Option<f64> {
    if secs.is_finite() && secs > 0.0 {
        Some(secs)
    } else {
        None
    }
}

/// Format seconds as `m:ss`. Zero and non-finite values render as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
