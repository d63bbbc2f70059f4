use unicode_segmentation::UnicodeSegmentation;

pub const METRICS_MIN_CHARS: usize = 10;
pub const METRICS_MAX_CHARS: usize = 50;

/// The metrics line ("2,000 weekly users", "40% month-over-month growth").
/// Same bounds as the authority statement: long enough to say something,
/// short enough to be digested at a glance.
#[derive(Debug)]
pub struct ProjectMetrics(String);

impl ProjectMetrics {
    pub fn parse(metrics: String) -> Result<Self, String> {
        if metrics.trim().is_empty() {
            return Err("The metrics line cannot be blank.".to_string());
        }
        match metrics.graphemes(true).count() {
            n if n < METRICS_MIN_CHARS => Err(format!(
                "The metrics line must be at least {METRICS_MIN_CHARS} characters."
            )),
            n if n > METRICS_MAX_CHARS => Err(format!(
                "The metrics line must be at most {METRICS_MAX_CHARS} characters."
            )),
            _ => Ok(Self(metrics)),
        }
    }
}

impl AsRef<str> for ProjectMetrics {
    fn as_ref(&self) -> &str { &self.0 }
}
