//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use serde::Serialize;
use whiteboard_domain::Priority;
use whiteboard_ops::{priority_icon, AddOutcome, BoardView, CleanReport, ToggleOutcome};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON, for scripts
    Json,
}

/// One row of the `sections` listing
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    /// Section name
    pub section: String,
    /// Active items
    pub active: usize,
    /// Capacity, `"∞"` when unbounded
    pub capacity: String,
    /// Items of any state
    pub total: usize,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the board view.
    pub fn board_view(&self, view: &BoardView) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(view);
        }

        let mut lines = Vec::new();
        for section in &view.sections {
            let header = format!("{} ({}/{})", section.section, section.active, section.capacity);
            let header = if section.over_capacity {
                format!("{} {}", self.colorize(&header, "bold"), self.warning("over capacity"))
            } else {
                self.colorize(&header, "bold")
            };
            lines.push(header);

            if section.items.is_empty() {
                lines.push(format!("  {}", self.colorize("(empty)", "dimmed")));
            }
            for item in &section.items {
                let id = self.colorize(&format!("[{}]", item.id), "cyan");
                if item.completed {
                    let content = self.colorize(&item.content, "strikethrough");
                    lines.push(format!("  ✅ {} {}", content, id));
                } else {
                    let content = self.colorize(&item.content, priority_color(item.priority));
                    lines.push(format!("  {} {} {}", priority_icon(item.priority), content, id));
                }
            }
            lines.push(String::new());
        }
        lines.pop();
        Ok(lines.join("\n"))
    }

    /// Format an add result; denials are warnings.
    pub fn add_outcome(&self, outcome: &AddOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(outcome),
            OutputFormat::Text if outcome.is_added() => Ok(self.success(&outcome.to_string())),
            OutputFormat::Text => Ok(self.warning(&outcome.to_string())),
        }
    }

    /// Format a toggle result; denials and unknown ids are warnings.
    pub fn toggle_outcome(&self, outcome: &ToggleOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(outcome),
            OutputFormat::Text if outcome.is_updated() => Ok(self.success(&outcome.to_string())),
            OutputFormat::Text => Ok(self.warning(&outcome.to_string())),
        }
    }

    /// Format a clean report.
    pub fn clean_report(&self, report: &CleanReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(report),
            OutputFormat::Text if report.moved == 0 => Ok(self.info(&report.to_string())),
            OutputFormat::Text => Ok(self.success(&report.to_string())),
        }
    }

    /// Format the section listing.
    pub fn sections(&self, rows: &[SectionSummary]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return json(rows);
        }

        let width = rows.iter().map(|row| row.section.chars().count()).max().unwrap_or(0);
        let lines: Vec<String> = rows
            .iter()
            .map(|row| {
                format!(
                    "{:<width$}  {:>3}/{:<3}  ({} total)",
                    row.section,
                    row.active,
                    row.capacity,
                    row.total,
                    width = width
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, style: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match style {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "bold" => text.bold().to_string(),
            "dimmed" => text.dimmed().to_string(),
            "strikethrough" => text.strikethrough().dimmed().to_string(),
            _ => text.to_string(),
        }
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "red",
        Priority::Medium => "plain",
        Priority::Low => "dimmed",
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiteboard_domain::{Board, ItemId, Section};
    use whiteboard_gatekeeper::Bouncer;

    fn sample_view() -> BoardView {
        let mut board = Board::new();
        let done = board.add(Section::TodaysTasks, "Write report", Priority::Medium).unwrap();
        board.add(Section::TodaysTasks, "Ship release", Priority::High).unwrap();
        board.set_completed(done, true);
        BoardView::build(&board, &Bouncer::default())
    }

    #[test]
    fn test_text_view() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.board_view(&sample_view()).unwrap();

        assert!(output.starts_with("Today's Tasks (1/5)"));
        assert!(output.contains("  ✅ Write report [1]"));
        assert!(output.contains("  🔥 Ship release [2]"));
        assert!(output.contains("Healthy Habits (0/∞)\n  (empty)"));
        assert!(!output.contains("Archive"));
    }

    #[test]
    fn test_json_view() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.board_view(&sample_view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sections"][0]["items"][1]["priority"], "High");
    }

    #[test]
    fn test_denial_is_a_warning() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter
            .add_outcome(&AddOutcome::Denied {
                section: Section::LongTermGoals,
                active: 3,
                limit: 3,
            })
            .unwrap();
        assert!(output.starts_with("⚠ Denied"));

        let output = formatter
            .add_outcome(&AddOutcome::Added {
                id: ItemId::new(4),
                section: Section::BrainDump,
                content: "x".to_string(),
                priority: Priority::Low,
            })
            .unwrap();
        assert!(output.starts_with("✓ Added"));
    }

    #[test]
    fn test_sections_table() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let rows = vec![
            SectionSummary {
                section: "Today's Tasks".to_string(),
                active: 2,
                capacity: "5".to_string(),
                total: 3,
            },
            SectionSummary {
                section: "Archive".to_string(),
                active: 0,
                capacity: "∞".to_string(),
                total: 9,
            },
        ];
        let output = formatter.sections(&rows).unwrap();
        assert!(output.contains("Today's Tasks    2/5    (3 total)"));
        assert!(output.contains("Archive"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
