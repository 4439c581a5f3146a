#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

#[must_use]
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0} hours")
    } else {
        format!("{hours} hours")
    }
}
