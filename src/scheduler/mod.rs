mod calendar;
mod place;
mod plan;
mod quota;
mod types;

pub use types::SchedError;

use crate::model::{ExclusionCalendar, Fellow, Schedule};
use chrono::NaiveDate;
use rand::Rng;
use std::collections::BTreeSet;

/// Configuration explicite d'une génération : le cœur ne lit aucun état
/// ambiant. Intervalle semi-ouvert `[start, end)`.
#[derive(Debug, Clone)]
pub struct RotaConfig {
    pub juniors: Vec<Fellow>,
    pub seniors: Vec<Fellow>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub exclusions: ExclusionCalendar,
    pub clinic_date: Option<NaiveDate>,
}

/// Scheduler : encapsule une config validée et produit un tableau de garde.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: RotaConfig,
}

impl Scheduler {
    /// Valide la config avant tout calcul : deux tiers non vides,
    /// intervalle strictement croissant.
    pub fn new(config: RotaConfig) -> Result<Self, SchedError> {
        if config.juniors.is_empty() {
            return Err(SchedError::EmptyStaffPool("junior tier is empty"));
        }
        if config.seniors.is_empty() {
            return Err(SchedError::EmptyStaffPool("senior tier is empty"));
        }
        if config.end <= config.start {
            return Err(SchedError::InvalidRange);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &RotaConfig {
        &self.config
    }

    fn all_staff(&self) -> Vec<Fellow> {
        let mut staff = self.config.juniors.clone();
        staff.extend(self.config.seniors.iter().cloned());
        staff
    }

    /// Génère le tableau : week-ends d'abord (répartition égale), puis
    /// jours de semaine (juniors `base + 1`). Tout l'aléa passe par `rng` ;
    /// graine fixe => sortie identique.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Schedule, SchedError> {
        let (weekend_days, weekday_days) = calendar::partition(self.config.start, self.config.end)?;
        let staff = self.all_staff();
        let mut consumed: BTreeSet<NaiveDate> = BTreeSet::new();

        // Pool week-end : longueur exacte par construction, shuffle seul.
        let weekend_q = quota::weekend_quotas(&staff, weekend_days.len(), rng)?;
        let mut weekend_plan = plan::expand(&weekend_q);
        plan::shuffle(&mut weekend_plan, rng);
        let weekend = place::place(
            &weekend_days,
            &weekend_plan,
            &self.config.exclusions,
            &mut consumed,
        );

        // Pool semaine : exclut les jours déjà consommés (garde-fou, le
        // découpage par jour de semaine rend le recouvrement impossible).
        let available: Vec<NaiveDate> = weekday_days
            .into_iter()
            .filter(|d| !consumed.contains(d))
            .collect();
        let weekday_q =
            quota::weekday_quotas(&self.config.juniors, &self.config.seniors, available.len())?;
        let mut weekday_plan = plan::expand(&weekday_q);
        let adjustment =
            plan::reconcile(&mut weekday_plan, available.len(), &self.config.juniors, rng);
        plan::shuffle(&mut weekday_plan, rng);
        let weekday = place::place(
            &available,
            &weekday_plan,
            &self.config.exclusions,
            &mut consumed,
        );

        let mut entries = weekend.entries;
        entries.extend(weekday.entries);
        entries.sort_by_key(|e| e.date);

        let mut unassigned = weekend.unassigned;
        unassigned.extend(weekday.unassigned);
        unassigned.sort_unstable();

        Ok(Schedule {
            entries,
            unassigned,
            adjustment,
        })
    }
}

/// Bornes semi-ouvertes d'un mois civil : `[1er du mois, 1er du mois suivant)`.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), SchedError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SchedError::Other(anyhow::anyhow!("invalid month: {year}-{month}")))?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| SchedError::Other(anyhow::anyhow!("invalid month: {year}-{month}")))?;
    Ok((start, end))
}
