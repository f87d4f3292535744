use crate::utils::formatting::time_label;
use crate::utils::time::hhmm_opt;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A persisted period during which tours are suspended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    pub id: i64,
    pub date: NaiveDate, // ⇔ disruptions.date (TEXT "YYYY-MM-DD")
    pub is_full_day: bool,
    #[serde(with = "hhmm_opt", default)]
    pub start_time: Option<NaiveTime>, // ⇔ disruptions.start_time (TEXT "HH:MM" or NULL)
    #[serde(with = "hhmm_opt", default)]
    pub end_time: Option<NaiveTime>,
    pub reason: String,
    pub refund_provided: bool,
    pub refund_amount: f64, // 0 when no refund
    pub created_at: String, // RFC 3339
    pub created_by_email: Option<String>,
}

impl Disruption {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_label(&self) -> String {
        time_label(self.is_full_day, self.start_time, self.end_time)
    }

    pub fn fields(&self) -> DisruptionFields {
        DisruptionFields {
            is_full_day: self.is_full_day,
            start_time: self.start_time,
            end_time: self.end_time,
            reason: self.reason.clone(),
            refund_provided: self.refund_provided,
            refund_amount: self.refund_amount,
        }
    }

    pub fn slot(&self) -> Slot {
        Slot {
            date: self.date,
            is_full_day: self.is_full_day,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Everything a submission shares across the days it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct DisruptionFields {
    pub is_full_day: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: String,
    pub refund_provided: bool,
    pub refund_amount: f64,
}

impl DisruptionFields {
    /// Drop values that are meaningless for the chosen flags.
    pub fn normalized(mut self) -> Self {
        if self.is_full_day {
            self.start_time = None;
            self.end_time = None;
        }
        if !self.refund_provided {
            self.refund_amount = 0.0;
        }
        self.reason = self.reason.trim().to_string();
        self
    }
}

/// A single-day creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDisruption {
    pub date: NaiveDate,
    pub fields: DisruptionFields,
    pub created_by_email: Option<String>,
}

impl NewDisruption {
    pub fn slot(&self) -> Slot {
        Slot {
            date: self.date,
            is_full_day: self.fields.is_full_day,
            start_time: self.fields.start_time,
            end_time: self.fields.end_time,
        }
    }

    /// Materialize the record once the store has assigned an id.
    pub fn into_disruption(self, id: i64) -> Disruption {
        Disruption {
            id,
            date: self.date,
            is_full_day: self.fields.is_full_day,
            start_time: self.fields.start_time,
            end_time: self.fields.end_time,
            reason: self.fields.reason,
            refund_provided: self.fields.refund_provided,
            refund_amount: self.fields.refund_amount,
            created_at: Local::now().to_rfc3339(),
            created_by_email: self.created_by_email,
        }
    }
}

/// The part of a disruption the conflict detector looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub is_full_day: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

/// Field-level changes for `update`. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisruptionPatch {
    pub date: Option<NaiveDate>,
    pub is_full_day: Option<bool>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub reason: Option<String>,
    pub refund_provided: Option<bool>,
    pub refund_amount: Option<f64>,
}

impl DisruptionPatch {
    pub fn is_empty(&self) -> bool {
        *self == DisruptionPatch::default()
    }

    /// Merge onto an existing record, returning the new date and fields.
    pub fn apply(&self, current: &Disruption) -> (NaiveDate, DisruptionFields) {
        let mut fields = current.fields();

        if let Some(v) = self.is_full_day {
            fields.is_full_day = v;
        }
        if let Some(v) = self.start_time {
            fields.start_time = Some(v);
        }
        if let Some(v) = self.end_time {
            fields.end_time = Some(v);
        }
        if let Some(v) = &self.reason {
            fields.reason = v.clone();
        }
        if let Some(v) = self.refund_provided {
            fields.refund_provided = v;
        }
        if let Some(v) = self.refund_amount {
            fields.refund_amount = v;
        }

        (self.date.unwrap_or(current.date), fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Disruption {
        Disruption {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            is_full_day: false,
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_time: NaiveTime::from_hms_opt(12, 0, 0),
            reason: "Strong wind".into(),
            refund_provided: false,
            refund_amount: 0.0,
            created_at: "2024-05-30T10:00:00+00:00".into(),
            created_by_email: None,
        }
    }

    #[test]
    fn json_uses_camel_case_and_hhmm() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isFullDay"], false);
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["date"], "2024-06-01");
    }

    #[test]
    fn normalizing_full_day_clears_times() {
        let f = DisruptionFields {
            is_full_day: true,
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_time: NaiveTime::from_hms_opt(10, 0, 0),
            reason: "  Fog  ".into(),
            refund_provided: false,
            refund_amount: 12.0,
        }
        .normalized();
        assert_eq!(f.start_time, None);
        assert_eq!(f.end_time, None);
        assert_eq!(f.refund_amount, 0.0);
        assert_eq!(f.reason, "Fog");
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let patch = DisruptionPatch {
            reason: Some("Thunderstorm".into()),
            ..Default::default()
        };
        let (date, fields) = patch.apply(&sample());
        assert_eq!(date, sample().date);
        assert_eq!(fields.reason, "Thunderstorm");
        assert_eq!(fields.start_time, sample().start_time);
        assert!(!patch.is_empty());
        assert!(DisruptionPatch::default().is_empty());
    }
}
