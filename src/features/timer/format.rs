//! Clock-face formatting and minute parsing.

const MS_PER_SECOND: i64 = 1_000;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;

/// Convert whole minutes to milliseconds.
#[must_use]
pub const fn minutes_to_ms(minutes: u32) -> i64 {
    minutes as i64 * MS_PER_MINUTE
}

/// Format a duration in milliseconds as a clock face.
///
/// `HH:MM:SS` when there is at least one hour, `MM:SS` otherwise. Partial
/// seconds are dropped. Negative values (overtime) keep their magnitude and
/// get a leading `-`.
#[must_use]
pub fn format_duration(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let total_seconds = ms.unsigned_abs() / 1_000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{minutes:02}:{seconds:02}")
    }
}

/// Parse a minute count typed by the user, like "25", "25m" or "1h30m".
///
/// A bare number is minutes. Returns `None` for anything unparsable.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<u32>() {
        return Some(minutes);
    }

    let mut total: u32 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            let num: u32 = current_num.parse().ok()?;
            current_num.clear();

            match c {
                'h' => total = total.checked_add(num.checked_mul(60)?)?,
                'm' => total = total.checked_add(num)?,
                _ => return None,
            }
        }
    }

    // Trailing number without unit counts as minutes
    if !current_num.is_empty() {
        total = total.checked_add(current_num.parse().ok()?)?;
    }

    if s.is_empty() {
        None
    } else {
        Some(total)
    }
}
