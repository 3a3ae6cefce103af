//! Date formatting shared by page templates.

use chrono::{DateTime, NaiveDate, Utc};

/// A date in machine (`datetime` attribute) and human form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplayDate {
    pub(crate) machine: String,
    pub(crate) human: String,
}

impl DisplayDate {
    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self {
            machine: date.format("%Y-%m-%d").to_string(),
            human: date.format("%b %-d, %Y").to_string(),
        }
    }
}

impl From<DateTime<Utc>> for DisplayDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_naive(value.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_both_forms() {
        let instant = Utc
            .with_ymd_and_hms(2020, 6, 5, 23, 59, 0)
            .single()
            .expect("valid instant");
        assert_eq!(
            DisplayDate::from(instant),
            DisplayDate {
                machine: "2020-06-05".to_owned(),
                human: "Jun 5, 2020".to_owned(),
            }
        );
    }
}
