use crate::core::{ComplexityClass, DeobfuscationResult};
use crate::errors::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// One deobfuscated input together with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    #[serde(flatten)]
    pub result: DeobfuscationResult,
}

impl Report {
    pub fn new(source: impl Into<String>, result: DeobfuscationResult) -> Self {
        Self {
            source: source.into(),
            result,
        }
    }
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[Report]) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    writer: W,
    format: OutputFormat,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

/// A single report is written as one object, several as an array.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[Report]) -> Result<()> {
        let json = match reports {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
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

    fn write_report(&mut self, report: &Report) -> Result<()> {
        let stats = &report.result.statistics;
        writeln!(self.writer, "## {}", report.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Original Lines", &stats.original_line_count.to_string())?;
        self.write_row("Deobfuscated Lines", &stats.final_line_count.to_string())?;
        self.write_row("Variables Renamed", &stats.identifiers_renamed.to_string())?;
        self.write_row("Strings Decoded", &stats.strings_decoded.to_string())?;
        self.write_row("Functions Renamed", &stats.functions_renamed.to_string())?;
        self.write_row("Complexity", &stats.complexity_class.to_string())?;
        self.write_row("Confidence", &format!("{}%", stats.confidence_score))?;
        writeln!(self.writer)?;

        if !report.result.warnings.is_empty() {
            writeln!(self.writer, "### Warnings")?;
            writeln!(self.writer)?;
            for warning in &report.result.warnings {
                writeln!(self.writer, "- {warning}")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "```lua")?;
        writeln!(self.writer, "{}", report.result.deobfuscated_code)?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_reports(&mut self, reports: &[Report]) -> Result<()> {
        writeln!(self.writer, "# Deobfuscation Report")?;
        writeln!(self.writer)?;
        for report in reports {
            self.write_report(report)?;
        }
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

    fn write_report(&mut self, report: &Report) -> Result<()> {
        let stats = &report.result.statistics;
        let divider = "=".repeat(60);

        writeln!(self.writer, "{}", divider.blue())?;
        writeln!(self.writer, "{} {}", "Source:".bold(), report.source)?;
        writeln!(self.writer, "{}", divider.blue())?;
        writeln!(self.writer, "{}", report.result.deobfuscated_code)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "Statistics".bold().underline())?;
        writeln!(
            self.writer,
            "  Lines:             {} -> {}",
            stats.original_line_count, stats.final_line_count
        )?;
        writeln!(
            self.writer,
            "  Variables renamed: {}",
            stats.identifiers_renamed
        )?;
        writeln!(self.writer, "  Strings decoded:   {}", stats.strings_decoded)?;
        writeln!(
            self.writer,
            "  Functions renamed: {}",
            stats.functions_renamed
        )?;
        writeln!(
            self.writer,
            "  Complexity:        {}",
            colorize_complexity(stats.complexity_class)
        )?;
        writeln!(
            self.writer,
            "  Confidence:        {}",
            format!("{}%", stats.confidence_score).bold()
        )?;

        for warning in &report.result.warnings {
            writeln!(self.writer, "  {} {}", "warning:".yellow().bold(), warning)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[Report]) -> Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        Ok(())
    }
}

fn colorize_complexity(class: ComplexityClass) -> ColoredString {
    let label = class.to_string();
    match class {
        ComplexityClass::Low => label.green(),
        ComplexityClass::Medium => label.yellow(),
        ComplexityClass::High => label.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::deobfuscate;

    fn sample_report() -> Report {
        Report::new("sample.lua", deobfuscate(r#"local x9f3a2b = "\72\105""#))
    }

    fn render(format: OutputFormat, reports: &[Report]) -> String {
        let mut buffer = Vec::new();
        create_writer(&mut buffer, format)
            .write_reports(reports)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_json_single_report_is_object() {
        let out = render(OutputFormat::Json, &[sample_report()]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "sample.lua");
        assert_eq!(value["deobfuscatedCode"], r#"local player = "Hi""#);
        assert_eq!(value["statistics"]["variablesRenamed"], 1);
    }

    #[test]
    fn test_json_many_reports_is_array() {
        let out = render(OutputFormat::Json, &[sample_report(), sample_report()]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_markdown_contains_table_and_code() {
        let out = render(OutputFormat::Markdown, &[sample_report()]);
        assert!(out.starts_with("# Deobfuscation Report"));
        assert!(out.contains("## sample.lua"));
        assert!(out.contains("| Strings Decoded | 2 |"));
        assert!(out.contains("```lua\nlocal player = \"Hi\"\n```"));
    }

    #[test]
    fn test_terminal_lists_statistics() {
        colored::control::set_override(false);
        let out = render(OutputFormat::Terminal, &[sample_report()]);
        assert!(out.contains("Source: sample.lua"));
        assert!(out.contains("Variables renamed: 1"));
        assert!(out.contains("Complexity:        Low"));
        assert!(out.contains("Confidence:        48%"));
    }
}
