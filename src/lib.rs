#![forbid(unsafe_code)]
//! Rotaplan — bibliothèque de génération de tableaux de garde mensuels (sans BD).
//!
//! - Deux tiers de staff (junior/senior), week-ends répartis à parts égales,
//!   un jour de semaine supplémentaire par junior.
//! - Exclusions par fellow (shifts externes bloqués, off-days demandés).
//! - Placement glouton en une passe, sans backtracking.
//! - Aléa injectable (graine fixe => sortie déterministe) ; import/export CSV.

pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;

pub use model::{
    ExclusionCalendar, Fellow, PlanAdjustment, Schedule, ScheduleEntry, SummaryRow, Tier,
};
pub use report::{clinic_coverage, ClinicCoverage, ReportRenderer, TextReport};
pub use scheduler::{month_bounds, RotaConfig, SchedError, Scheduler};
