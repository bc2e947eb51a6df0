use std::fmt::{self, Write};
use chrono::{DateTime, Local};
use crate::enums::severity::Severity;
use crate::structs::analysis_result::AnalysisResult;

pub struct ReportLogger;

impl ReportLogger {

    /// Plain-text report: header, one block per issue, then metrics and suggestions.
    pub fn render_text_report(result: &AnalysisResult, generated_at: DateTime<Local>) -> String {
        let mut report = String::new();
        if let Err(e) = Self::write_text_report(&mut report, result, generated_at) {
            log::warn!("⚠️ Report rendering stopped early: {}", e);
        }
        report
    }

    fn write_text_report(out: &mut impl Write, result: &AnalysisResult, generated_at: DateTime<Local>) -> fmt::Result {
        writeln!(out, "Java Code Analysis Report")?;
        writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(out, "Total issues: {}", result.issues.len())?;
        writeln!(out)?;

        for issue in &result.issues {
            writeln!(
                out,
                "• [{}] {}: {}",
                issue.severity.as_str().to_uppercase(),
                issue.issue_type.display_name(),
                issue.message
            )?;
            writeln!(out, "  Location: line {}", issue.line)?;
            writeln!(out, "  Suggestion: {}", issue.suggestion)?;
            writeln!(out)?;
        }

        let metrics = &result.metrics;
        writeln!(out, "Metrics")?;
        writeln!(out, "  Complexity: {}", metrics.complexity)?;
        writeln!(out, "  Lines: {}", metrics.lines)?;
        writeln!(out, "  Maintainability: {}", metrics.maintainability)?;
        writeln!(out, "  Security score: {}", metrics.security_score)?;

        if result.suggestions.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "Suggestions")?;
        for suggestion in &result.suggestions {
            match suggestion.priority {
                Some(priority) => writeln!(out, "  - {} ({}): {}", suggestion.title, priority.as_str(), suggestion.content)?,
                None => writeln!(out, "  - {}: {}", suggestion.title, suggestion.content)?,
            }
        }

        Ok(())
    }

    pub fn print_summary(result: &AnalysisResult) {
        eprintln!("\n🔍 JAVA CODE ANALYSIS");
        eprintln!("=====================");
        eprintln!("📊 {} issues found", result.issues.len());
        for severity in Severity::ALL {
            let count = result.summary.count(severity);
            if count > 0 {
                eprintln!("  {} {}: {}", severity.emoji(), severity.as_str().to_uppercase(), count);
            }
        }
        eprintln!(
            "📈 complexity {} | maintainability {} | security score {}",
            result.metrics.complexity, result.metrics.maintainability, result.metrics.security_score
        );
    }
}
