//! UI rendering for the timer window.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::timer::{Clock, RecordStore};
use crate::tui::app::App;

/// Render the application UI.
pub fn render<C: Clock, S: RecordStore>(frame: &mut Frame<'_>, app: &App<'_, C, S>) {
    // Header, body, status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    render_header(frame, rows[0]);
    render_clock(frame, app, columns[0]);
    render_adjust(frame, app, columns[1]);
    render_status_bar(frame, app, rows[2]);
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(" Work Timer ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Display label, start/stop button and reset button.
fn render_clock<C: Clock, S: RecordStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, S>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let display = Paragraph::new(app.timer().display().to_string())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, chunks[0]);

    let button_color = if app.timer().is_running() {
        Color::Red
    } else {
        Color::Green
    };
    let toggle = Paragraph::new(format!("[space] {}", app.toggle_label()))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(button_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[1]);

    let reset = Paragraph::new("[r] Reset")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(reset, chunks[2]);
}

/// Minutes entry field with increment/decrement buttons.
fn render_adjust<C: Clock, S: RecordStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, S>,
    area: Rect,
) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {:>6} ", app.entry),
                Style::default().fg(Color::Black).bg(Color::White),
            ),
            Span::raw(" minutes"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" [+] ", Style::default().fg(Color::Green)),
            Span::styled(" [-] ", Style::default().fg(Color::Red)),
        ]),
    ];

    let adjust = Paragraph::new(lines).block(
        Block::default()
            .title(" Adjust ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(adjust, area);
}

fn render_status_bar<C: Clock, S: RecordStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, C, S>,
    area: Rect,
) {
    let status = match (app.timer().last_failure(), app.status.as_deref()) {
        (Some(failure), _) => {
            Paragraph::new(failure.to_string()).style(Style::default().fg(Color::Yellow))
        }
        (None, Some(status)) => {
            Paragraph::new(status.to_string()).style(Style::default().fg(Color::DarkGray))
        }
        (None, None) => {
            Paragraph::new("space:start/stop | r:reset | +/-:adjust | ?:help | q:quit")
                .style(Style::default().fg(Color::DarkGray))
        }
    };

    frame.render_widget(status, area);
}
