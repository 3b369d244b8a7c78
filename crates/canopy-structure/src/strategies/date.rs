use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use canopy_types::{ContentTypeId, Item, Location};

use crate::error::Result;
use crate::organizer::{Organizer, RouteContext};

/// One component of a date cascade level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    /// Render this component of `date` as a bucket name.
    ///
    /// Plain decimal, no zero padding: March is "3", the 7th is "7".
    fn render(&self, date: &DateTime<Utc>) -> String {
        match self {
            Self::Year => date.year().to_string(),
            Self::Month => date.month().to_string(),
            Self::Day => date.day().to_string(),
        }
    }
}

/// Buckets children into a date cascade: year, year/month, or
/// year/month/day.
///
/// The cascade is an ordered list of `(container type, date part)` levels;
/// each level's bucket is created under the previous one. A child that is
/// itself of the top-level (year) type is terminal.
///
/// The bucket date defaults to the child's creation timestamp and can be
/// redirected to a named RFC 3339 date attribute with
/// [`with_date_attribute`]; a missing or unparseable attribute falls back
/// to the creation timestamp.
///
/// If the host hands back an unusable bucket (empty location) at some
/// level, the cascade stops and returns the deepest usable level instead
/// of descending further.
///
/// [`with_date_attribute`]: DateOrganizer::with_date_attribute
#[derive(Clone, Debug)]
pub struct DateOrganizer {
    levels: Vec<(ContentTypeId, DatePart)>,
    date_attribute: Option<String>,
}

impl DateOrganizer {
    /// A cascade with explicit levels, outermost first.
    pub fn new(levels: Vec<(ContentTypeId, DatePart)>) -> Self {
        Self {
            levels,
            date_attribute: None,
        }
    }

    /// A one-level cascade: year buckets only.
    pub fn yearly(year_kind: ContentTypeId) -> Self {
        Self::new(vec![(year_kind, DatePart::Year)])
    }

    /// A two-level cascade: year, then month.
    pub fn monthly(year_kind: ContentTypeId, month_kind: ContentTypeId) -> Self {
        Self::new(vec![
            (year_kind, DatePart::Year),
            (month_kind, DatePart::Month),
        ])
    }

    /// A three-level cascade: year, then month, then day.
    pub fn daily(
        year_kind: ContentTypeId,
        month_kind: ContentTypeId,
        day_kind: ContentTypeId,
    ) -> Self {
        Self::new(vec![
            (year_kind, DatePart::Year),
            (month_kind, DatePart::Month),
            (day_kind, DatePart::Day),
        ])
    }

    /// Bucket by a named RFC 3339 date attribute of the child instead of
    /// its creation timestamp.
    pub fn with_date_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.date_attribute = Some(attribute.into());
        self
    }

    /// The date the child is bucketed under.
    fn bucket_date(&self, child: &Item) -> DateTime<Utc> {
        if let Some(attribute) = &self.date_attribute {
            if let Some(raw) = child.attribute(attribute) {
                match DateTime::parse_from_rfc3339(raw) {
                    Ok(parsed) => return parsed.with_timezone(&Utc),
                    Err(error) => {
                        debug!(attribute = %attribute, raw, %error, "unparseable date attribute, using created");
                    }
                }
            }
        }
        child.created
    }
}

impl Organizer for DateOrganizer {
    fn name(&self) -> &str {
        "date"
    }

    fn route(&self, container: &Item, child: &Item, ctx: &RouteContext<'_>) -> Result<Location> {
        let Some((top_kind, _)) = self.levels.first() else {
            return Ok(container.location);
        };
        if child.kind == *top_kind {
            return Ok(container.location);
        }

        let date = self.bucket_date(child);
        let mut current = container.location;

        for (kind, part) in &self.levels {
            let bucket = ctx.resolver.get_or_create(&current, *kind, &part.render(&date))?;
            if bucket.location.is_none() {
                // Unusable bucket from the host: stop at the deepest good level.
                break;
            }
            current = bucket.location;
        }

        Ok(current)
    }
}
