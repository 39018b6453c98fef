//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::core::Clock;
use crate::features::practice::{PresetChoice, ViewModel};
use crate::storage::RecordStore;
use crate::tui::app::App;

const HELP: &str = "s:start p:pause space:toggle r:reset x:stop | tab:section m:timing 0-9:custom | j/k d:delete | q:quit";

/// Render the application UI.
pub fn render<C: Clock + Clone, S: RecordStore>(frame: &mut Frame<'_>, app: &App<'_, C, S>) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Clock
            Constraint::Length(1), // Buttons
            Constraint::Length(3), // Stats
            Constraint::Min(0),    // History
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, &view, chunks[0]);
    render_clock(frame, &view, chunks[1]);
    render_buttons(frame, &view, chunks[2]);
    render_stats(frame, &view, chunks[3]);
    render_history(frame, app, &view, chunks[4]);
    render_status_bar(frame, app, &view, chunks[5]);
}

/// Render the header: section, timing option, state.
fn render_header<C: Clock + Clone, S: RecordStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, S>,
    view: &ViewModel,
    area: Rect,
) {
    let section = view.section.as_deref().map_or_else(
        || Span::styled("none selected", Style::default().fg(Color::DarkGray)),
        |s| Span::styled(s.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    );

    let timing = match view.preset {
        PresetChoice::Custom if app.editing_custom() => {
            let shown = if app.custom_input.is_empty() { "_" } else { app.custom_input.as_str() };
            format!("Custom: {shown} min")
        }
        other => other.to_string(),
    };

    let line = Line::from(vec![
        Span::raw(" Section: "),
        section,
        Span::raw("   Timing: "),
        Span::styled(timing, Style::default().fg(Color::Yellow)),
        Span::raw(format!("   [{}]", view.state)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" practimer "),
    );

    frame.render_widget(header, area);
}

/// Render the clock face; red once a countdown has run out.
fn render_clock(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let style = if view.time_up {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(""), Line::from(Span::styled(view.display.clone(), style))];
    if view.time_up {
        lines.push(Line::from(Span::styled("OVERTIME", Style::default().fg(Color::Red))));
    }

    let clock = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", view.mode)));

    frame.render_widget(clock, area);
}

/// Render the button bar, dimming unusable controls.
fn render_buttons(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let button = |key: &str, label: &str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" [{key}] {label} "), style)
    };

    let line = Line::from(vec![
        button("s", "Start", view.buttons.start),
        button("p", "Pause", view.buttons.pause),
        button("r", "Reset", view.buttons.reset),
        button("x", "Stop", view.buttons.stop),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the statistics panel.
fn render_stats(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let stats = &view.stats;
    let label = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(" Sessions ", label),
        Span::raw(stats.count.to_string()),
        Span::styled("   Average ", label),
        Span::raw(stats.format_average()),
        Span::styled("   Total ", label),
        Span::raw(stats.format_total()),
        Span::styled("   Best ", label),
        Span::raw(stats.format_best()),
    ]);

    let panel = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Stats "));
    frame.render_widget(panel, area);
}

/// Render the history table, newest first.
fn render_history<C: Clock + Clone, S: RecordStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, S>,
    view: &ViewModel,
    area: Rect,
) {
    let rows: Vec<Row<'_>> = view
        .history
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if app.confirm_delete == Some(i) {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(row.section.clone()),
                Cell::from(row.duration.clone()),
                Cell::from(row.timestamp.clone()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Length(10),
            Constraint::Min(19),
        ],
    )
    .header(
        Row::new(vec!["Section", "Time", "Completed"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(" History "))
    .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default();
    if !view.history.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the status bar: confirmation prompt, notice, or help.
fn render_status_bar<C: Clock + Clone, S: RecordStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, S>,
    view: &ViewModel,
    area: Rect,
) {
    let (text, style) = if let Some(index) = app.confirm_delete {
        let target = view
            .history
            .get(index)
            .map_or_else(String::new, |row| format!(" {} ({})", row.section, row.duration));
        (
            format!("Delete{target}? (y/n)"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else if app.show_help {
        (HELP.to_string(), Style::default().fg(Color::DarkGray))
    } else if let Some(notice) = &view.notice {
        (notice.clone(), Style::default().fg(Color::Yellow))
    } else {
        ("?:help | q:quit".to_string(), Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
