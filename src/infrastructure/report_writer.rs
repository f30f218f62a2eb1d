use crate::application::market_data::chart_series::ChartSeries;
use crate::application::risk_management::pipeline::SourceReport;
use crate::domain::risk::INDICATOR_COLUMNS;
use crate::domain::risk::indicators::format_cell;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Output encoding for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => anyhow::bail!(
                "Invalid REPORT_FORMAT: {}. Must be 'table', 'csv', or 'json'",
                s
            ),
        }
    }
}

const TABLE_PRECISION: usize = 6;
const COLUMN_WIDTH: usize = 14;

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    indicators: &'a crate::domain::risk::RiskTable,
}

#[derive(Serialize)]
struct ChartRow<'a> {
    ticker: &'a str,
    date: chrono::NaiveDate,
    value: f64,
}

/// Writes the indicator table of one source.
pub fn write_indicators<W: Write>(out: &mut W, report: &SourceReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Table => write_text(out, report),
        ReportFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *out);
            wtr.write_record(INDICATOR_COLUMNS)?;
            for record in report.table.iter() {
                wtr.serialize(record)
                    .with_context(|| format!("Failed to serialize {}", record.ticker))?;
            }
            wtr.flush()?;
            Ok(())
        }
        ReportFormat::Json => {
            let doc = JsonReport {
                source: &report.name,
                indicators: &report.table,
            };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(out: &mut W, report: &SourceReport) -> Result<()> {
    writeln!(out, "Indicadores de Riesgo: {}", report.name)?;

    let header: Vec<String> = INDICATOR_COLUMNS
        .iter()
        .map(|c| format!("{:>width$}", c, width = COLUMN_WIDTH))
        .collect();
    writeln!(out, "{}", header.join(" "))?;

    for record in report.table.iter() {
        let mut cells = vec![format!("{:>width$}", record.ticker, width = COLUMN_WIDTH)];
        cells.extend(
            record
                .values()
                .iter()
                .map(|v| format!("{:>width$}", format_cell(*v, TABLE_PRECISION), width = COLUMN_WIDTH)),
        );
        writeln!(out, "{}", cells.join(" "))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Writes chart series as long rows (`ticker,date,value`) or JSON.
pub fn write_chart<W: Write>(out: &mut W, series: &[ChartSeries], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, series)?;
            writeln!(out)?;
        }
        ReportFormat::Table | ReportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for s in series {
                for (date, value) in &s.points {
                    wtr.serialize(ChartRow {
                        ticker: &s.ticker,
                        date: *date,
                        value: *value,
                    })?;
                }
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
