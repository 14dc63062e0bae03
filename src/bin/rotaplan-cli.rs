#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rotaplan::{
    io,
    model::{ExclusionCalendar, Fellow, Tier},
    report::{clinic_coverage, ReportRenderer, TextReport},
    scheduler::{month_bounds, RotaConfig, Scheduler},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de tableau de garde (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le tableau de garde d'un mois
    Generate {
        /// liste "nom1,nom2,..." des juniors
        #[arg(long)]
        juniors: String,
        /// liste "nom1,nom2,..." des seniors
        #[arg(long)]
        seniors: String,

        /// Mois civil (1-12) ; exige --year
        #[arg(long, conflicts_with_all = ["start", "end"])]
        month: Option<u32>,
        #[arg(long, requires = "month")]
        year: Option<i32>,

        /// Début d'intervalle (AAAA-MM-JJ, inclus)
        #[arg(long, requires = "end")]
        start: Option<NaiveDate>,
        /// Fin d'intervalle (AAAA-MM-JJ, exclue)
        #[arg(long, requires = "start")]
        end: Option<NaiveDate>,

        /// Planning de shifts EM (CSV `Fellow,Date,Start_Time`)
        #[arg(long)]
        em_csv: Option<String>,
        /// Demandes d'off-days (CSV `Fellow,Off_Date`)
        #[arg(long)]
        off_csv: Option<String>,

        /// Jour de clinique (lookup a posteriori)
        #[arg(long)]
        clinic: Option<NaiveDate>,

        /// Graine du générateur aléatoire (reproductibilité)
        #[arg(long)]
        seed: Option<u64>,

        /// Export CSV du tableau (`Date,Day,Fellow`)
        #[arg(long)]
        out_csv: Option<String>,
        /// Export CSV du récapitulatif par fellow
        #[arg(long)]
        summary_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            juniors,
            seniors,
            month,
            year,
            start,
            end,
            em_csv,
            off_csv,
            clinic,
            seed,
            out_csv,
            summary_csv,
        } => {
            let (start, end) = match (month, year, start, end) {
                (Some(m), Some(y), None, None) => month_bounds(y, m)?,
                (None, None, Some(s), Some(e)) => (s, e),
                (Some(_), None, ..) => bail!("--month requires --year"),
                _ => bail!("provide either --month/--year or --start/--end"),
            };

            let mut exclusions = ExclusionCalendar::new();
            if let Some(path) = em_csv {
                io::import_em_schedule_csv(path, &mut exclusions)?;
            }
            if let Some(path) = off_csv {
                io::import_off_days_csv(path, &mut exclusions)?;
            }

            let config = RotaConfig {
                juniors: parse_fellows(&juniors, Tier::Junior),
                seniors: parse_fellows(&seniors, Tier::Senior),
                start,
                end,
                exclusions,
                clinic_date: clinic,
            };
            let scheduler = Scheduler::new(config)?;

            let mut rng = match seed {
                Some(s) => ChaCha8Rng::seed_from_u64(s),
                None => ChaCha8Rng::from_entropy(),
            };
            let schedule = scheduler.generate(&mut rng)?;

            for e in &schedule.entries {
                println!("{} | {} | {}", e.date, e.day_name(), e.fellow);
            }

            let renderer = TextReport;
            print!("{}", renderer.render_summary(&schedule));
            if let Some(date) = scheduler.config().clinic_date {
                println!("{}", renderer.render_coverage(&clinic_coverage(&schedule, date)));
            }

            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            if let Some(path) = summary_csv {
                io::export_summary_csv(path, &schedule)?;
            }

            let mut warn = false;
            if !schedule.unassigned.is_empty() {
                eprintln!("Warning: {} day(s) left unassigned", schedule.unassigned.len());
                for d in &schedule.unassigned {
                    eprintln!("  {d}");
                }
                warn = true;
            }
            if !schedule.adjustment.is_clean() {
                eprintln!(
                    "Warning: weekday plan adjusted (trimmed {}, padded {})",
                    schedule.adjustment.trimmed, schedule.adjustment.padded
                );
                warn = true;
            }
            // Code 2 = WARNING/INCOMPLETE
            if warn {
                2
            } else {
                0
            }
        }
    };

    std::process::exit(code);
}

fn parse_fellows(list: &str, tier: Tier) -> Vec<Fellow> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| Fellow::new(name, tier))
        .collect()
}
