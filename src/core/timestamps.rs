use thiserror::Error;

/// Failure to derive a usable timestamp set from the raw input string
#[derive(Debug, Error, PartialEq)]
pub enum TimestampParseError {
    #[error("no timestamps given")]
    Empty,
    #[error("invalid timestamp: {token:?}")]
    InvalidToken { token: String },
}

/// Parse a comma-separated seconds string ("3, 5.5, 10") into a sorted,
/// deduplicated timestamp list. Empty tokens are skipped; anything that is
/// not a finite, non-negative number rejects the whole input.
pub fn parse_timestamps(spec: &str) -> Result<Vec<f64>, TimestampParseError> {
    let mut timestamps = Vec::new();

    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token
            .parse()
            .map_err(|_| TimestampParseError::InvalidToken {
                token: token.to_string(),
            })?;
        if !value.is_finite() || value < 0.0 {
            return Err(TimestampParseError::InvalidToken {
                token: token.to_string(),
            });
        }
        timestamps.push(value);
    }

    if timestamps.is_empty() {
        return Err(TimestampParseError::Empty);
    }

    timestamps.sort_by(f64::total_cmp);
    timestamps.dedup();

    Ok(timestamps)
}

/// Render a timestamp the way it appears in output file names: integral
/// values keep one decimal place ("2" -> "2.0"), everything else uses the
/// shortest exact representation ("5.5" -> "5.5").
pub fn format_timestamp(ts: f64) -> String {
    if ts.fract() == 0.0 {
        format!("{:.1}", ts)
    } else {
        format!("{}", ts)
    }
}
