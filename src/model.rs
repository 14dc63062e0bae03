use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Niveau d'ancienneté d'un fellow (impacte le quota de semaine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Junior,
    Senior,
}

/// Membre de la rotation de garde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fellow {
    pub name: String,
    pub tier: Tier,
}

impl Fellow {
    pub fn new<N: Into<String>>(name: N, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

/// Indisponibilités par fellow : dates bloquées (shifts externes) et
/// off-days demandés. Les deux sources restent séparées ; l'union est
/// faite au lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionCalendar {
    #[serde(default)]
    pub blocked: BTreeMap<String, BTreeSet<NaiveDate>>,
    #[serde(default)]
    pub off_days: BTreeMap<String, BTreeSet<NaiveDate>>,
}

impl ExclusionCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&mut self, name: &str, date: NaiveDate) {
        self.blocked.entry(name.to_string()).or_default().insert(date);
    }

    pub fn request_off(&mut self, name: &str, date: NaiveDate) {
        self.off_days
            .entry(name.to_string())
            .or_default()
            .insert(date);
    }

    /// Un fellow est inéligible si la date figure dans l'une OU l'autre source.
    pub fn is_excluded(&self, name: &str, date: NaiveDate) -> bool {
        self.blocked.get(name).is_some_and(|s| s.contains(&date))
            || self.off_days.get(name).is_some_and(|s| s.contains(&date))
    }
}

/// Jour de garde attribué.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub fellow: String,
}

impl ScheduleEntry {
    /// Nom du jour de semaine ("Monday", ...), dérivé à l'affichage.
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    pub fn is_weekend(&self) -> bool {
        is_weekend(self.date)
    }
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

/// Écart entre quotas calculés et plan réellement placé (troncature ou
/// remplissage du plan de semaine). Diagnostic uniquement : le comportement
/// observable (tronquer / compléter) est conservé.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAdjustment {
    pub trimmed: usize,
    pub padded: usize,
}

impl PlanAdjustment {
    pub fn is_clean(&self) -> bool {
        self.trimmed == 0 && self.padded == 0
    }
}

/// Ligne du récapitulatif par fellow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub fellow: String,
    pub total_shifts: usize,
    pub weekend_shifts: usize,
}

/// Tableau de garde final : entrées triées par date, plus les diagnostics
/// de génération (dates restées sans couverture, ajustements de plan).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    #[serde(default)]
    pub unassigned: Vec<NaiveDate>,
    #[serde(default)]
    pub adjustment: PlanAdjustment,
}

impl Schedule {
    /// Fellow de garde à une date donnée, ou `None` si le jour est resté
    /// sans couverture.
    pub fn on_call(&self, date: NaiveDate) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.date == date)
            .map(|e| e.fellow.as_str())
    }

    /// Récapitulatif par fellow (total + week-ends), trié par nom.
    pub fn summary(&self) -> Vec<SummaryRow> {
        let mut totals: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for e in &self.entries {
            let slot = totals.entry(e.fellow.as_str()).or_default();
            slot.0 += 1;
            if e.is_weekend() {
                slot.1 += 1;
            }
        }
        totals
            .into_iter()
            .map(|(fellow, (total, weekend))| SummaryRow {
                fellow: fellow.to_string(),
                total_shifts: total,
                weekend_shifts: weekend,
            })
            .collect()
    }
}
