use hovertip::Phase;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::demo_state::DemoApp;

pub fn render(frame: &mut Frame, app: &DemoApp) {
    let area = frame.area();

    for host in app.stage.hosts() {
        let rect = host.rect.intersection(area);
        if rect.is_empty() {
            continue;
        }
        let style = if host.enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let button = Paragraph::new(host.label.as_str())
            .centered()
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .style(style);
        frame.render_widget(button, rect);
    }

    for session in app.stage.open_sessions() {
        let Some(rect) = session.rect.map(|r| r.intersection(area)) else {
            continue;
        };
        if rect.is_empty() {
            continue;
        }
        let tip = Paragraph::new(session.text.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(Clear, rect);
        frame.render_widget(tip, rect);
    }

    render_status(frame, app, area);
}

fn render_status(frame: &mut Frame, app: &DemoApp, area: Rect) {
    if area.height == 0 {
        return;
    }
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(status_line(app)).style(Style::default().fg(Color::Gray)),
        status_area,
    );
}

pub fn status_line(app: &DemoApp) -> String {
    let phase = match app.coordinator.phase() {
        Phase::Closed => "closed".to_string(),
        Phase::Open => match app.coordinator.current_host() {
            Some(host) => format!("open on {}", host),
            None => "open".to_string(),
        },
        Phase::ClosedPendingReopen => match app.coordinator.pending_reopen() {
            Some(host) => format!("closed, reopen pending for {}", host),
            None => "closed".to_string(),
        },
    };
    let timer = if app.coordinator.is_reopen_scheduled() {
        " | reopen scheduled"
    } else {
        ""
    };
    format!("tooltip {}{} | c: close  q: quit", phase, timer)
}

#[cfg(test)]
#[path = "demo_render_tests.rs"]
mod demo_render_tests;
