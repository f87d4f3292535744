//! Same-day overlap detection between a candidate and stored disruptions.

use crate::models::{Disruption, Slot};
use crate::utils::time::minutes_since_midnight;
use chrono::NaiveDate;

/// Closed-interval overlap on minutes since midnight.
///
/// Touching endpoints (`[09:00,12:00]` vs `[12:00,15:00]`) count as an
/// overlap. This may be an off-by-one in the historical behavior rather than
/// an intent; it is kept as-is until the operator decides otherwise.
pub fn intervals_overlap(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0 <= b.1 && a.1 >= b.0
}

fn bounds(slot: &Slot) -> Option<(u32, u32)> {
    match (slot.start_time, slot.end_time) {
        (Some(s), Some(e)) => Some((minutes_since_midnight(s), minutes_since_midnight(e))),
        _ => None,
    }
}

/// Would persisting `candidate` overlap anything in `existing`?
pub fn has_conflict(candidate: &Slot, existing: &[Disruption]) -> bool {
    let same_day: Vec<&Disruption> = existing
        .iter()
        .filter(|d| d.date == candidate.date)
        .collect();

    if same_day.is_empty() {
        return false;
    }

    // A full-day record on either side blocks the whole date.
    if candidate.is_full_day || same_day.iter().any(|d| d.is_full_day) {
        return true;
    }

    let Some(cand) = bounds(candidate) else {
        return false;
    };

    same_day
        .iter()
        .filter_map(|d| bounds(&d.slot()))
        .any(|other| intervals_overlap(cand, other))
}

/// First date among `candidates` that conflicts with `existing`.
pub fn first_conflict<'a, I>(candidates: I, existing: &[Disruption]) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'a Slot>,
{
    candidates
        .into_iter()
        .find(|c| has_conflict(c, existing))
        .map(|c| c.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn hm(s: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(s, "%H:%M").ok()
    }

    fn partial(day: &str, start: &str, end: &str) -> Slot {
        Slot {
            date: date(day),
            is_full_day: false,
            start_time: hm(start),
            end_time: hm(end),
        }
    }

    fn full(day: &str) -> Slot {
        Slot {
            date: date(day),
            is_full_day: true,
            start_time: None,
            end_time: None,
        }
    }

    fn stored(id: i64, slot: Slot) -> Disruption {
        Disruption {
            id,
            date: slot.date,
            is_full_day: slot.is_full_day,
            start_time: slot.start_time,
            end_time: slot.end_time,
            reason: "Weather".into(),
            refund_provided: false,
            refund_amount: 0.0,
            created_at: "2024-05-01T00:00:00Z".into(),
            created_by_email: None,
        }
    }

    #[test]
    fn empty_day_never_conflicts() {
        let existing = vec![
            stored(1, full("2024-06-02")),
            stored(2, partial("2024-05-31", "00:00", "23:59")),
        ];
        assert!(!has_conflict(&full("2024-06-01"), &existing));
        assert!(!has_conflict(&partial("2024-06-01", "09:00", "10:00"), &existing));
        assert!(!has_conflict(&full("2024-06-01"), &[]));
    }

    #[test]
    fn full_day_candidate_conflicts_with_anything() {
        let existing = vec![stored(1, partial("2024-06-01", "06:00", "06:30"))];
        assert!(has_conflict(&full("2024-06-01"), &existing));
    }

    #[test]
    fn existing_full_day_blocks_partial_candidate() {
        let existing = vec![stored(1, full("2024-06-01"))];
        assert!(has_conflict(&partial("2024-06-01", "20:00", "21:00"), &existing));
    }

    #[test]
    fn touching_endpoints_conflict() {
        let existing = vec![stored(1, partial("2024-06-01", "09:00", "12:00"))];
        assert!(has_conflict(&partial("2024-06-01", "12:00", "15:00"), &existing));
    }

    #[test]
    fn disjoint_partials_do_not_conflict() {
        let existing = vec![stored(1, partial("2024-06-01", "09:00", "12:00"))];
        assert!(!has_conflict(&partial("2024-06-01", "12:01", "15:00"), &existing));
        assert!(!has_conflict(&partial("2024-06-01", "07:00", "08:59"), &existing));
    }

    #[test]
    fn overlap_predicate_is_symmetric() {
        let samples = [(0, 10), (5, 15), (10, 20), (11, 12), (30, 40), (0, 100)];
        for a in samples {
            for b in samples {
                let expected = a.0 <= b.1 && a.1 >= b.0;
                assert_eq!(intervals_overlap(a, b), expected);
                assert_eq!(intervals_overlap(a, b), intervals_overlap(b, a));
            }
        }
    }

    #[test]
    fn malformed_partial_rows_are_skipped() {
        let mut broken = partial("2024-06-01", "09:00", "12:00");
        broken.end_time = None;
        let existing = vec![stored(1, broken)];
        assert!(!has_conflict(&partial("2024-06-01", "10:00", "11:00"), &existing));
    }

    #[test]
    fn first_conflict_reports_the_date() {
        let existing = vec![stored(1, full("2024-06-02"))];
        let candidates = [full("2024-06-01"), full("2024-06-02"), full("2024-06-03")];
        assert_eq!(first_conflict(&candidates, &existing), Some(date("2024-06-02")));
        assert_eq!(first_conflict(&candidates[..1], &existing), None);
    }
}
