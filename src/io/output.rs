use std::io::Write;

use clap::ValueEnum;
use colored::*;
use serde::Serialize;

use crate::core::{HealthRecord, RiskAssessment, RiskLevel, SCORE_CAP};
use crate::risk::factors::{MSG_BLOOD_PRESSURE, MSG_DIABETES};
use crate::risk::Trend;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Everything a writer needs to render one assessment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub assessment: RiskAssessment,
    /// Display-only simulated percentage; absent when suppressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_percent: Option<f64>,
}

/// A page of history plus its trend, ready for rendering.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub user_id: String,
    pub total: usize,
    /// Newest first, already truncated to the page limit.
    pub records: Vec<HealthRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

pub trait OutputWriter {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()>;
    fn write_history(&mut self, view: &HistoryView) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_history(&mut self, view: &HistoryView) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(view)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let a = &report.assessment;
        writeln!(self.writer, "# Heart Health Risk Assessment")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Score | {} / {} |", a.total_score, SCORE_CAP)?;
        writeln!(self.writer, "| Risk level | {} |", a.level)?;
        writeln!(self.writer, "| BMI | {:.1} |", a.bmi)?;
        if let Some(percent) = report.simulated_percent {
            writeln!(
                self.writer,
                "| Simulated 10-year risk | {percent:.1}% |"
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "## Precautions")?;
        writeln!(self.writer)?;
        for precaution in &a.precautions {
            writeln!(self.writer, "- {precaution}")?;
        }
        Ok(())
    }

    fn write_history(&mut self, view: &HistoryView) -> anyhow::Result<()> {
        writeln!(self.writer, "# Health Record History")?;
        writeln!(self.writer)?;
        if let Some(trend) = view.trend {
            writeln!(
                self.writer,
                "**{}** by {} points since last check.",
                trend.direction.label(),
                trend.magnitude
            )?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "| Date | Score | Level | BMI | Steps |")?;
        writeln!(self.writer, "|------|-------|-------|-----|-------|")?;
        for record in &view.records {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2} | {} |",
                record.recorded_at.format("%Y-%m-%d"),
                record.score,
                record.level,
                record.bmi,
                record.steps_per_day
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Showing {} of {} records.",
            view.records.len(),
            view.total
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn colored_level(level: RiskLevel) -> ColoredString {
        match level {
            RiskLevel::Low => level.as_str().green().bold(),
            RiskLevel::Moderate => level.as_str().yellow().bold(),
            RiskLevel::High => level.as_str().red().bold(),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_assessment(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let a = &report.assessment;
        writeln!(
            self.writer,
            "Risk score: {} / {}  [{}]",
            a.total_score.to_string().bold(),
            SCORE_CAP,
            Self::colored_level(a.level)
        )?;
        writeln!(self.writer, "{}", a.summary())?;
        if let Some(percent) = report.simulated_percent {
            writeln!(
                self.writer,
                "{}",
                format!("{percent:.1}% 10-year risk (simulated)").dimmed()
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Precautions:")?;
        for precaution in group_condition_messages(a.precautions.iter().map(String::as_str)) {
            writeln!(self.writer, "  - {precaution}")?;
        }
        Ok(())
    }

    fn write_history(&mut self, view: &HistoryView) -> anyhow::Result<()> {
        if view.records.is_empty() {
            writeln!(
                self.writer,
                "No records found. Calculate your score to see it here!"
            )?;
            return Ok(());
        }
        if let Some(trend) = view.trend {
            let line = format!(
                "{} {} points since last check",
                trend.direction.label(),
                trend.magnitude
            );
            let line = match trend.direction {
                crate::risk::TrendDirection::Increasing => line.red(),
                crate::risk::TrendDirection::Decreasing => line.green(),
                crate::risk::TrendDirection::Stable => line.normal(),
            };
            writeln!(self.writer, "{line}")?;
            writeln!(self.writer)?;
        }
        for record in &view.records {
            writeln!(
                self.writer,
                "{}  {} ({})  BMI {:.2}  steps {}  exercise {}h  smoking {}",
                record.recorded_at.format("%b %d, %Y"),
                record.score.to_string().bold(),
                Self::colored_level(record.level),
                record.bmi,
                record.steps_per_day,
                record.exercise_hours_per_week,
                if record.smoker { "Yes" } else { "No" }
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Showing {} of {} records.",
            view.records.len(),
            view.total
        )?;
        Ok(())
    }
}

/// Merge the blood-pressure and diabetes advisories into one grouped line
/// for terminal display, as the source presented its combined medical
/// condition message. Grouping only; scoring is untouched.
pub fn group_condition_messages<'a>(messages: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut grouped: Vec<String> = Vec::new();
    for message in messages {
        if message == MSG_DIABETES
            && grouped.last().map(String::as_str) == Some(MSG_BLOOD_PRESSURE)
        {
            let last = grouped.last_mut().unwrap();
            last.push(' ');
            last.push_str(message);
        } else {
            grouped.push(message.to_string());
        }
    }
    grouped
}
