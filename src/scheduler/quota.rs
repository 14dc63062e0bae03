use super::types::SchedError;
use crate::model::Fellow;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Quotas de week-end : répartition égale, le reste distribué un par un
/// selon une permutation aléatoire du staff (aucune priorité fixe).
pub(super) fn weekend_quotas<R: Rng>(
    staff: &[Fellow],
    n_days: usize,
    rng: &mut R,
) -> Result<BTreeMap<String, usize>, SchedError> {
    if staff.is_empty() {
        return Err(SchedError::EmptyStaffPool("no fellows for weekend quota"));
    }

    let base = n_days / staff.len();
    let extra = n_days % staff.len();

    let mut quotas: BTreeMap<String, usize> =
        staff.iter().map(|f| (f.name.clone(), base)).collect();

    let mut shuffled: Vec<&Fellow> = staff.iter().collect();
    shuffled.shuffle(rng);
    for f in shuffled.iter().take(extra) {
        if let Some(q) = quotas.get_mut(&f.name) {
            *q += 1;
        }
    }
    Ok(quotas)
}

/// Quotas de semaine : les juniors prennent `base + 1`, les seniors `base`.
/// Pas de distribution du reste ici ; l'écart éventuel avec le nombre de
/// jours disponibles est résorbé lors de la réconciliation du plan.
pub(super) fn weekday_quotas(
    juniors: &[Fellow],
    seniors: &[Fellow],
    n_available: usize,
) -> Result<BTreeMap<String, usize>, SchedError> {
    let total = juniors.len() + seniors.len();
    if total == 0 {
        return Err(SchedError::EmptyStaffPool("no fellows for weekday quota"));
    }

    let base = n_available / total;
    let mut quotas = BTreeMap::new();
    for f in juniors {
        quotas.insert(f.name.clone(), base + 1);
    }
    for f in seniors {
        quotas.insert(f.name.clone(), base);
    }
    Ok(quotas)
}
