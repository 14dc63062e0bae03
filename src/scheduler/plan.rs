use crate::model::{Fellow, PlanAdjustment};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Déplie un quota en séquence plate : chaque nom répété `quota[nom]` fois.
pub(super) fn expand(quotas: &BTreeMap<String, usize>) -> Vec<String> {
    let mut plan = Vec::with_capacity(quotas.values().sum());
    for (name, count) in quotas {
        for _ in 0..*count {
            plan.push(name.clone());
        }
    }
    plan
}

/// Ajuste la longueur du plan de semaine sur le nombre de jours
/// disponibles : on tronque la queue si trop long, on complète avec un
/// junior tiré au hasard si trop court. L'écart est remonté tel quel en
/// diagnostic, sans tentative de préserver les quotas.
pub(super) fn reconcile<R: Rng>(
    plan: &mut Vec<String>,
    target_len: usize,
    juniors: &[Fellow],
    rng: &mut R,
) -> PlanAdjustment {
    let mut adjustment = PlanAdjustment::default();
    while plan.len() > target_len {
        plan.pop();
        adjustment.trimmed += 1;
    }
    while plan.len() < target_len {
        if let Some(f) = juniors.choose(rng) {
            plan.push(f.name.clone());
            adjustment.padded += 1;
        } else {
            break;
        }
    }
    adjustment
}

pub(super) fn shuffle<R: Rng>(plan: &mut [String], rng: &mut R) {
    plan.shuffle(rng);
}
