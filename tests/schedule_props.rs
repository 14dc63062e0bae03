#![forbid(unsafe_code)]
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rotaplan::{
    clinic_coverage, ClinicCoverage, ExclusionCalendar, Fellow, RotaConfig, Scheduler, Tier,
};
use std::collections::BTreeSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_one_config(start: NaiveDate, end: NaiveDate) -> RotaConfig {
    RotaConfig {
        juniors: vec![Fellow::new("shin", Tier::Junior), Fellow::new("mahony", Tier::Junior)],
        seniors: vec![Fellow::new("burke", Tier::Senior)],
        start,
        end,
        exclusions: ExclusionCalendar::new(),
        clinic_date: None,
    }
}

#[test]
fn entries_stay_within_range_and_dates_are_unique() {
    let start = date(2025, 10, 1);
    let end = date(2025, 11, 1);
    let scheduler = Scheduler::new(two_one_config(start, end)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let schedule = scheduler.generate(&mut rng).unwrap();

    let mut seen = BTreeSet::new();
    for e in &schedule.entries {
        assert!(e.date >= start && e.date < end);
        assert!(seen.insert(e.date), "duplicate date {}", e.date);
    }
}

#[test]
fn summary_totals_match_assigned_count() {
    let scheduler = Scheduler::new(two_one_config(date(2025, 10, 1), date(2025, 11, 1))).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let schedule = scheduler.generate(&mut rng).unwrap();

    let total: usize = schedule.summary().iter().map(|r| r.total_shifts).sum();
    assert_eq!(total, schedule.entries.len());

    let weekend_total: usize = schedule.summary().iter().map(|r| r.weekend_shifts).sum();
    let weekend_count = schedule.entries.iter().filter(|e| e.is_weekend()).count();
    assert_eq!(weekend_total, weekend_count);
}

#[test]
fn weekends_fully_covered_without_exclusions() {
    // octobre 2025 : 8 jours de week-end
    let scheduler = Scheduler::new(two_one_config(date(2025, 10, 1), date(2025, 11, 1))).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let schedule = scheduler.generate(&mut rng).unwrap();

    let covered: Vec<_> = schedule
        .entries
        .iter()
        .filter(|e| e.is_weekend())
        .map(|e| e.date)
        .collect();
    assert_eq!(covered.len(), 8);
    assert!(schedule.unassigned.is_empty());
}

#[test]
fn zero_weekend_range_yields_weekday_only_schedule() {
    // lundi 6 -> samedi 11 (exclu) : aucun jour de week-end
    let scheduler = Scheduler::new(two_one_config(date(2025, 10, 6), date(2025, 10, 11))).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let schedule = scheduler.generate(&mut rng).unwrap();

    assert_eq!(schedule.entries.len(), 5);
    assert!(schedule.entries.iter().all(|e| !e.is_weekend()));
    assert!(schedule.adjustment.is_clean());
}

#[test]
fn oversized_weekday_plan_is_trimmed() {
    // 3 jours de semaine, 2 juniors + 1 senior : base = 1, plan = 2+2+1 = 5,
    // la queue est tronquée de 2 entrées pour retomber sur 3 jours.
    let scheduler = Scheduler::new(two_one_config(date(2025, 10, 7), date(2025, 10, 10))).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let schedule = scheduler.generate(&mut rng).unwrap();

    assert_eq!(schedule.adjustment.trimmed, 2);
    assert_eq!(schedule.adjustment.padded, 0);
    assert_eq!(schedule.entries.len(), 3);
    assert!(schedule.unassigned.is_empty());
}

#[test]
fn undersized_weekday_plan_is_padded_with_a_junior() {
    // 5 jours de semaine, 1 junior + 2 seniors : base = 1, plan = 2+1+1 = 4,
    // complété par une entrée junior.
    let cfg = RotaConfig {
        juniors: vec![Fellow::new("shin", Tier::Junior)],
        seniors: vec![
            Fellow::new("burke", Tier::Senior),
            Fellow::new("johnson", Tier::Senior),
        ],
        start: date(2025, 10, 6),
        end: date(2025, 10, 11),
        exclusions: ExclusionCalendar::new(),
        clinic_date: None,
    };
    let scheduler = Scheduler::new(cfg).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let schedule = scheduler.generate(&mut rng).unwrap();

    assert_eq!(schedule.adjustment.padded, 1);
    assert_eq!(schedule.adjustment.trimmed, 0);
    assert_eq!(schedule.entries.len(), 5);

    // l'entrée de remplissage va au junior
    let shin = schedule
        .summary()
        .into_iter()
        .find(|r| r.fellow == "shin")
        .unwrap();
    assert_eq!(shin.total_shifts, 3);
}

#[test]
fn exclusions_are_never_violated() {
    let mut exclusions = ExclusionCalendar::new();
    exclusions.block("shin", date(2025, 10, 11));
    exclusions.block("shin", date(2025, 10, 14));
    exclusions.request_off("burke", date(2025, 10, 12));
    exclusions.request_off("mahony", date(2025, 10, 8));

    let mut cfg = two_one_config(date(2025, 10, 6), date(2025, 10, 20));
    cfg.exclusions = exclusions.clone();
    let scheduler = Scheduler::new(cfg).unwrap();

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let schedule = scheduler.generate(&mut rng).unwrap();
        for e in &schedule.entries {
            assert!(
                !exclusions.is_excluded(&e.fellow, e.date),
                "seed {seed}: {} assigned on excluded day {}",
                e.fellow,
                e.date
            );
        }
    }
}

#[test]
fn fully_excluded_fellow_gets_nothing_and_entries_are_discarded() {
    let start = date(2025, 10, 6);
    let end = date(2025, 10, 13);
    let mut cfg = two_one_config(start, end);
    let mut day = start;
    while day < end {
        cfg.exclusions.request_off("shin", day);
        day = day.succ_opt().unwrap();
    }
    let scheduler = Scheduler::new(cfg).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let schedule = scheduler.generate(&mut rng).unwrap();

    assert!(schedule.entries.iter().all(|e| e.fellow != "shin"));
    assert!(schedule.summary().iter().all(|r| r.fellow != "shin"));

    // les entrées sautées sont défaussées, pas redistribuées : chaque jour
    // est soit couvert, soit listé sans couverture
    assert_eq!(schedule.entries.len() + schedule.unassigned.len(), 7);
    // le plan de semaine porte 2 entrées "shin" sur 5 : au moins 2 jours perdus
    assert!(schedule.unassigned.len() >= 2);
}

#[test]
fn duplicate_tier_membership_resolves_to_senior_quota() {
    // appartenance aux deux tiers non validée : les quotas étant indexés
    // par nom et les seniors insérés en dernier, le nom en double retombe
    // sur le quota senior (base) au lieu de doubler.
    let cfg = RotaConfig {
        juniors: vec![Fellow::new("shin", Tier::Junior), Fellow::new("mahony", Tier::Junior)],
        seniors: vec![Fellow::new("shin", Tier::Senior)],
        start: date(2025, 10, 7),
        end: date(2025, 10, 10),
        exclusions: ExclusionCalendar::new(),
        clinic_date: None,
    };
    let scheduler = Scheduler::new(cfg).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let schedule = scheduler.generate(&mut rng).unwrap();

    // 3 jours de semaine, base = 1 : shin 1 (senior), mahony 2 (junior)
    assert!(schedule.adjustment.is_clean());
    assert!(schedule.unassigned.is_empty());
    let summary = schedule.summary();
    assert_eq!(
        summary.iter().find(|r| r.fellow == "shin").unwrap().total_shifts,
        1
    );
    assert_eq!(
        summary.iter().find(|r| r.fellow == "mahony").unwrap().total_shifts,
        2
    );
}

#[test]
fn clinic_lookup_hits_and_misses() {
    let scheduler = Scheduler::new(two_one_config(date(2025, 10, 6), date(2025, 10, 13))).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let schedule = scheduler.generate(&mut rng).unwrap();

    let assigned = schedule.entries[0].clone();
    match clinic_coverage(&schedule, assigned.date) {
        ClinicCoverage::Covered { fellow, .. } => assert_eq!(fellow, assigned.fellow),
        ClinicCoverage::Uncovered { .. } => panic!("expected coverage"),
    }

    let outside = date(2025, 12, 25);
    assert!(matches!(
        clinic_coverage(&schedule, outside),
        ClinicCoverage::Uncovered { .. }
    ));
}
