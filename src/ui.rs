use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::conversation::Role;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Transcript
            Constraint::Length(3), // Input
        ])
        .split(f.area());

    render_transcript(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
}

fn sender_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Role::Assistant => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Role::System => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for msg in app.conversation.messages() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", msg.timestamp), Style::default().fg(Color::DarkGray)),
            Span::styled(msg.role.label(), sender_style(msg.role)),
            Span::raw(": "),
            Span::raw(msg.content.as_str()),
        ]));
        // Empty line between messages for readability
        lines.push(Line::from(""));
    }

    let title = if app.in_flight {
        "Conversation (waiting for reply...)"
    } else {
        "Conversation"
    };

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));
    f.render_widget(transcript, area);
}

fn render_input(f: &mut Frame, app: &mut App, area: Rect) {
    let title = if app.in_flight {
        "Input (Enter to send, reply pending)"
    } else {
        "Input (Enter to send, Esc to quit)"
    };

    app.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if app.in_flight {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            }),
    );
    f.render_widget(&app.textarea, area);
}
