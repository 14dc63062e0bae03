use super::types::SchedError;
use crate::model::is_weekend;
use chrono::NaiveDate;

/// Découpe l'intervalle semi-ouvert `[start, end)` en jours de week-end
/// (samedi/dimanche) et jours de semaine, dans l'ordre calendaire.
pub(super) fn partition(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(Vec<NaiveDate>, Vec<NaiveDate>), SchedError> {
    if end <= start {
        return Err(SchedError::InvalidRange);
    }

    let mut weekends = Vec::new();
    let mut weekdays = Vec::new();
    let mut current = start;
    while current < end {
        if is_weekend(current) {
            weekends.push(current);
        } else {
            weekdays.push(current);
        }
        current = current
            .succ_opt()
            .ok_or_else(|| SchedError::Other(anyhow::anyhow!("date overflow at {current}")))?;
    }
    Ok((weekends, weekdays))
}
