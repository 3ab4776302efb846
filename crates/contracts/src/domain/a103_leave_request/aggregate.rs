use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Editable leave request fields for `POST /leave-requests`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestPayload {
    pub staff_id: String,
    pub leave_type_id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub handover_staff_id: String,
}

impl LeaveRequestPayload {
    /// Inclusive number of calendar days, `None` when either date is
    /// missing/invalid or the range is reversed.
    pub fn number_of_days(&self) -> Option<i64> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok()?;
        let days = (end - start).num_days() + 1;
        (days > 0).then_some(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_of_days() {
        let mut p = LeaveRequestPayload {
            start_date: "2024-03-01".into(),
            end_date: "2024-03-05".into(),
            ..Default::default()
        };
        assert_eq!(p.number_of_days(), Some(5));

        p.end_date = "2024-02-28".into();
        assert_eq!(p.number_of_days(), None);

        p.end_date = "soon".into();
        assert_eq!(p.number_of_days(), None);
    }
}
