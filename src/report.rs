use crate::model::Schedule;
use chrono::NaiveDate;

/// Résultat du lookup du jour de clinique contre le tableau produit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClinicCoverage {
    Covered { date: NaiveDate, fellow: String },
    Uncovered { date: NaiveDate },
}

/// Lookup a posteriori : le jour de clinique ne participe pas à la
/// génération, on interroge simplement le tableau.
pub fn clinic_coverage(schedule: &Schedule, date: NaiveDate) -> ClinicCoverage {
    match schedule.on_call(date) {
        Some(fellow) => ClinicCoverage::Covered {
            date,
            fellow: fellow.to_string(),
        },
        None => ClinicCoverage::Uncovered { date },
    }
}

/// Permet de customiser le rendu du rapport (texte, mail, etc.).
pub trait ReportRenderer {
    fn render_coverage(&self, coverage: &ClinicCoverage) -> String;
    fn render_summary(&self, schedule: &Schedule) -> String;
}

/// Gabarit texte simple destiné à la sortie console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render_coverage(&self, coverage: &ClinicCoverage) -> String {
        match coverage {
            ClinicCoverage::Covered { date, fellow } => format!(
                "{fellow} is on call for the clinic day: {}",
                date.format("%A, %B %d, %Y")
            ),
            ClinicCoverage::Uncovered { date } => format!(
                "No fellow is assigned for the clinic day: {}",
                date.format("%A, %B %d, %Y")
            ),
        }
    }

    fn render_summary(&self, schedule: &Schedule) -> String {
        let mut out = String::from("Fellow | Total | Weekend\n");
        for row in schedule.summary() {
            out.push_str(&format!(
                "{} | {} | {}\n",
                row.fellow, row.total_shifts, row.weekend_shifts
            ));
        }
        out
    }
}
