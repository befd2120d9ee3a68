use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::rubric::Category;
use crate::survey::QUESTIONS;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + spacer(1) + Question(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], theme);
    render_question(frame, chunks[2], app, theme);
    render_status_bar(frame, chunks[3], app, theme);
}

fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Line::from(Span::styled("Participation", theme.title));
    frame.render_widget(Paragraph::new(title), area);
}

fn render_question(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let question = app.question();

    let mut lines = vec![
        Line::from(Span::styled(question.title, theme.title)),
        Line::from(Span::styled(
            question.description,
            Style::default().fg(theme.description),
        )),
        Line::from(""),
    ];

    for (i, category) in Category::ALL.iter().enumerate() {
        if i == app.cursor {
            lines.push(Line::from(vec![
                Span::styled("❯ ", Style::default().fg(theme.cursor)),
                Span::styled(category.label(), theme.highlighted),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(category.label(), Style::default().fg(theme.option)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let progress = format!("Question {} of {}", app.current + 1, QUESTIONS.len());

    let mut spans = vec![
        Span::styled(progress, Style::default().fg(theme.muted)),
        Span::raw("  "),
    ];

    let hints = [
        ("↑/↓", ":move "),
        ("enter", ":select "),
        ("←", ":back "),
        ("q", ":quit"),
    ];
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme.status_key)));
        spans.push(Span::raw(*label));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}
