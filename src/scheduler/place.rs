use crate::model::{ExclusionCalendar, ScheduleEntry};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Résultat d'une passe de placement sur un pool de jours.
pub(super) struct Placement {
    pub entries: Vec<ScheduleEntry>,
    pub unassigned: Vec<NaiveDate>,
}

/// Placement glouton en une passe : le plan est consommé de gauche à
/// droite, jamais rejoué. Pour chaque jour (ordre calendaire), le curseur
/// avance jusqu'au premier candidat sans exclusion pour ce jour ; les
/// candidats sautés sont défaussés et ne reviennent pas dans le pool.
/// Plan épuisé => le jour reste sans couverture (pas d'erreur).
pub(super) fn place(
    dates: &[NaiveDate],
    plan: &[String],
    exclusions: &ExclusionCalendar,
    consumed: &mut BTreeSet<NaiveDate>,
) -> Placement {
    let mut entries = Vec::with_capacity(dates.len());
    let mut unassigned = Vec::new();
    let mut cursor = 0usize;

    for &date in dates {
        let mut assigned = false;
        while cursor < plan.len() {
            let fellow = &plan[cursor];
            cursor += 1;
            if !exclusions.is_excluded(fellow, date) {
                entries.push(ScheduleEntry {
                    date,
                    fellow: fellow.clone(),
                });
                consumed.insert(date);
                assigned = true;
                break;
            }
        }
        if !assigned {
            unassigned.push(date);
        }
    }

    Placement {
        entries,
        unassigned,
    }
}
