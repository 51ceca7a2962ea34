// src/application/commands/articles/input.rs
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Write payload shared by create and update. Optional fields follow the
/// admin form: a missing `tag_list` leaves associations alone, an empty
/// one clears them.
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: String,
    pub slug: Option<String>,
    pub body: String,
    /// Zone-less `YYYY-MM-DDTHH:MM[:SS]` from a datetime-local field,
    /// or a full RFC 3339 timestamp.
    pub published_at: Option<String>,
    pub tag_list: Option<String>,
}

/// Interpret a zone-less timestamp string under `zone`. The HTML
/// datetime-local input carries no offset, and reading it as UTC shifts
/// every publish time by the site's offset; the zone is explicit state
/// handed in by the caller, never a process-wide setting. Strings that
/// do carry an offset are honored as written.
pub fn parse_published_at(value: &str, zone: Tz) -> Result<DateTime<Utc>, String> {
    let value = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("'{value}' is not a valid datetime"))?;

    match zone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        // DST fold: take the earlier wall-clock reading.
        LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
        LocalResult::None => Err(format!("'{value}' does not exist in zone {zone}")),
    }
}
