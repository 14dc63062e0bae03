use crate::model::{ExclusionCalendar, Schedule};
use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Seuil au-delà duquel un shift EM ne bloque pas le jour de garde : un
/// shift démarrant à 23:00 ou plus tard laisse le fellow disponible.
const EM_BLOCK_CUTOFF: (u32, u32) = (23, 0);

/// Import du planning de shifts EM : header `Fellow,Date,Start_Time`.
/// Une ligne bloque la date si le shift démarre strictement avant 23:00.
pub fn import_em_schedule_csv<P: AsRef<Path>>(
    path: P,
    exclusions: &mut ExclusionCalendar,
) -> anyhow::Result<()> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&path)?;
    let headers = rdr.headers()?.clone();
    let fellow_idx = column(&headers, "Fellow")?;
    let date_idx = column(&headers, "Date")?;
    let time_idx = column(&headers, "Start_Time")?;

    let cutoff = NaiveTime::from_hms_opt(EM_BLOCK_CUTOFF.0, EM_BLOCK_CUTOFF.1, 0)
        .context("invalid cutoff time")?;

    for rec in rdr.records() {
        let rec = rec?;
        let fellow = field(&rec, fellow_idx, "Fellow")?;
        let date = parse_date(field(&rec, date_idx, "Date")?)?;
        let raw_start = field(&rec, time_idx, "Start_Time")?;
        let start = NaiveTime::parse_from_str(raw_start, "%H:%M")
            .with_context(|| format!("invalid Start_Time for fellow {fellow}"))?;
        if start < cutoff {
            exclusions.block(fellow, date);
        }
    }
    Ok(())
}

/// Import des demandes d'off-days : header `Fellow,Off_Date`.
pub fn import_off_days_csv<P: AsRef<Path>>(
    path: P,
    exclusions: &mut ExclusionCalendar,
) -> anyhow::Result<()> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&path)?;
    let headers = rdr.headers()?.clone();
    let fellow_idx = column(&headers, "Fellow")?;
    let date_idx = column(&headers, "Off_Date")?;

    for rec in rdr.records() {
        let rec = rec?;
        let fellow = field(&rec, fellow_idx, "Fellow")?;
        let date = parse_date(field(&rec, date_idx, "Off_Date")?)?;
        exclusions.request_off(fellow, date);
    }
    Ok(())
}

fn column(headers: &StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .with_context(|| format!("missing column {name}"))
}

fn field<'r>(rec: &'r StringRecord, idx: usize, name: &str) -> anyhow::Result<&'r str> {
    let value = rec.get(idx).with_context(|| format!("missing {name}"))?.trim();
    if value.is_empty() {
        bail!("empty {name} field");
    }
    Ok(value)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Export CSV du tableau : header `Date,Day,Fellow`, lignes triées par date.
/// Écriture atomique (fichier temporaire puis rename).
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    write_atomic(path.as_ref(), |tmp| {
        let mut w = WriterBuilder::new().has_headers(true).from_writer(tmp);
        w.write_record(["Date", "Day", "Fellow"])?;
        for e in &schedule.entries {
            let date = e.date.format("%Y-%m-%d").to_string();
            let day = e.day_name();
            w.write_record([date.as_str(), day.as_str(), e.fellow.as_str()])?;
        }
        w.flush()?;
        Ok(())
    })
}

/// Export CSV du récapitulatif : header `Fellow,Total_Shifts,Weekend_Shifts`.
pub fn export_summary_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    write_atomic(path.as_ref(), |tmp| {
        let mut w = WriterBuilder::new().has_headers(true).from_writer(tmp);
        w.write_record(["Fellow", "Total_Shifts", "Weekend_Shifts"])?;
        for row in schedule.summary() {
            w.write_record([
                row.fellow.as_str(),
                row.total_shifts.to_string().as_str(),
                row.weekend_shifts.to_string().as_str(),
            ])?;
        }
        w.flush()?;
        Ok(())
    })
}

fn write_atomic<F>(path: &Path, fill: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> anyhow::Result<()>,
{
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    fill(&mut tmp)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
