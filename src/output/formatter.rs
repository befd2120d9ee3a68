use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::rubric::letter_grade;
use crate::survey::{WeeklyParticipation, QUESTIONS};

/// Report panel width in columns, including the border.
const PANEL_WIDTH: usize = 60;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Build the verdict text: one letter grade per rubric line, then the
/// overall score as a percentage with one decimal place.
pub fn format_verdict(week: &WeeklyParticipation, use_colors: bool) -> String {
    let mut lines = vec!["Participation!".to_string(), String::new()];

    if use_colors {
        lines.push("VERDICT".bold().to_string());
    } else {
        lines.push("VERDICT".to_string());
    }
    lines.push(String::new());

    for (question, category) in QUESTIONS.iter().zip(week.categories()) {
        let grade = letter_grade(category.label());
        if use_colors {
            lines.push(format!("{}: {}", question.title, grade.magenta()));
        } else {
            lines.push(format!("{}: {}", question.title, grade));
        }
    }
    lines.push(String::new());

    let score = format!("{:.1}%", week.overall_score());
    if use_colors {
        lines.push(format!("Overall Participation Score: {}", score.magenta()));
    } else {
        lines.push(format!("Overall Participation Score: {}", score));
    }

    lines.join("\n")
}

/// The full report: the verdict wrapped in a rounded-border panel sized
/// for the current terminal.
pub fn render_report(week: &WeeklyParticipation, use_colors: bool) -> String {
    render_panel(&format_verdict(week, use_colors), panel_width(), use_colors)
}

/// Panel width clamped to the terminal; pipes get the full width.
fn panel_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => PANEL_WIDTH.min(w as usize),
        None => PANEL_WIDTH,
    }
}

/// Wrap `text` in a rounded border with one row of vertical and two
/// columns of horizontal padding. `width` includes the border columns.
fn render_panel(text: &str, width: usize, use_colors: bool) -> String {
    let inner = width.saturating_sub(2);
    let content = inner.saturating_sub(4);

    let horizontal = "─".repeat(inner);
    let blank = " ".repeat(inner);

    let edge = |s: &str| -> String {
        if use_colors {
            s.blue().to_string()
        } else {
            s.to_string()
        }
    };

    let mut out = Vec::new();
    out.push(edge(&format!("╭{}╮", horizontal)));
    out.push(format!("{}{}{}", edge("│"), blank, edge("│")));
    for line in text.lines() {
        let fill = " ".repeat(content.saturating_sub(visible_width(line)));
        out.push(format!("{}  {}{}  {}", edge("│"), line, fill, edge("│")));
    }
    out.push(format!("{}{}{}", edge("│"), blank, edge("│")));
    out.push(edge(&format!("╰{}╯", horizontal)));

    out.join("\n")
}

/// Column count of `s` with ANSI escape sequences excluded.
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip the CSI sequence through its final byte.
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}
