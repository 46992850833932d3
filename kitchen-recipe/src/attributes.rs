//! Optional recipe attributes
//!
//! Description, equipment, time to make and notes. None of them are needed
//! for a recipe to be valid, but when given they are checked here.

use std::time::Duration;

use crate::error::{RecipeError, RecipeResult};

/// Approximate time to make a recipe, as given before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    Exact(Duration),
    Minutes(u64),
    /// Human readable, like `1h 30m`, or a bare number of minutes
    Text(String),
}

impl TimeInput {
    pub(crate) fn resolve(self) -> RecipeResult<Duration> {
        let duration = match self {
            TimeInput::Exact(d) => d,
            TimeInput::Minutes(m) => minutes(m),
            TimeInput::Text(text) => parse_time(&text)?,
        };
        if duration.is_zero() {
            return Err(RecipeError::invalid_attribute(
                "time",
                "it must be longer than zero",
            ));
        }
        Ok(duration)
    }
}

impl From<Duration> for TimeInput {
    fn from(value: Duration) -> Self {
        Self::Exact(value)
    }
}

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m.saturating_mul(60))
}

/// Parses a time like `1h 30m`, `45min` or just `45` (minutes)
pub fn parse_time(s: &str) -> RecipeResult<Duration> {
    let s = s.trim();
    match humantime::parse_duration(s) {
        Ok(duration) => Ok(duration),
        Err(e) => s
            .parse::<u64>()
            .map(minutes)
            .map_err(|_| RecipeError::invalid_attribute("time", format!("'{s}': {e}"))),
    }
}

/// Blank descriptions are the same as no description
pub(crate) fn description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// Trims every item and removes repeated ones, keeping the first
pub(crate) fn equipment(items: Vec<String>) -> RecipeResult<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in non_blank("equipment", items)? {
        if !out.iter().any(|e| e.eq_ignore_ascii_case(&item)) {
            out.push(item);
        } else {
            tracing::trace!("ignoring repeated equipment '{item}'");
        }
    }
    Ok(out)
}

pub(crate) fn notes(notes: Vec<String>) -> RecipeResult<Vec<String>> {
    non_blank("notes", notes)
}

fn non_blank(attribute: &'static str, items: Vec<String>) -> RecipeResult<Vec<String>> {
    items
        .into_iter()
        .map(|item| {
            let trimmed = item.trim();
            if trimmed.is_empty() {
                Err(RecipeError::invalid_attribute(
                    attribute,
                    "items cannot be empty",
                ))
            } else {
                Ok(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_text() {
        assert_eq!(parse_time("1h 30m").unwrap(), Duration::from_secs(90 * 60));
        assert_eq!(parse_time("45min").unwrap(), Duration::from_secs(45 * 60));
        assert_eq!(parse_time(" 20 ").unwrap(), Duration::from_secs(20 * 60));
        assert!(matches!(
            parse_time("a while"),
            Err(RecipeError::InvalidAttribute {
                attribute: "time",
                ..
            })
        ));
    }

    #[test]
    fn time_zero() {
        assert!(TimeInput::Minutes(0).resolve().is_err());
        assert!(TimeInput::Text("0".into()).resolve().is_err());
        assert!(TimeInput::Exact(Duration::ZERO).resolve().is_err());
        assert_eq!(TimeInput::Minutes(5).resolve().unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn blank_description() {
        assert_eq!(description(Some("   ".into())), None);
        assert_eq!(description(None), None);
        assert_eq!(description(Some(" Summer stew ".into())), Some("Summer stew".into()));
    }

    #[test]
    fn equipment_dedup() {
        let items = vec!["Pot".to_string(), " knife".into(), "pot".into()];
        assert_eq!(equipment(items).unwrap(), vec!["Pot", "knife"]);
        assert!(equipment(vec!["".into()]).is_err());
    }

    #[test]
    fn blank_note() {
        assert!(notes(vec!["Serve warm".into(), " ".into()]).is_err());
        assert_eq!(notes(vec![]).unwrap(), Vec::<String>::new());
    }
}
