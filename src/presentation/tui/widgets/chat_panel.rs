use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::domain::entities::{ChatRole, Conversation};

const fn role_color(role: ChatRole) -> Color {
    match role {
        ChatRole::User => Color::Yellow,
        ChatRole::Assistant => Color::Cyan,
    }
}

pub fn render_chat_panel(
    frame: &mut Frame,
    conversation: &Conversation,
    input: &str,
    list_state: &mut ListState,
    is_focused: bool,
    area: Rect,
) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let [history_area, input_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(area);

    let history_block = Block::default()
        .title("Conversa")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem<'_>> = if conversation.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Pergunte algo sobre a máquina monitorada",
            Style::default().add_modifier(Modifier::DIM),
        )))]
    } else {
        conversation
            .entries()
            .iter()
            .map(|entry| {
                let time = entry.timestamp.format("%H:%M").to_string();
                let line = Line::from(vec![
                    Span::styled(
                        format!("[{time}] "),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(
                        format!("{}: ", entry.role),
                        Style::default()
                            .fg(role_color(entry.role))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(entry.text.clone()),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let history = List::new(items)
        .block(history_block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(history, history_area, list_state);

    let cursor = if is_focused { "█" } else { "" };
    let input_block = Block::default()
        .title("Pergunta (Enter envia)")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let input_line = Paragraph::new(format!("{input}{cursor}")).block(input_block);

    frame.render_widget(input_line, input_area);
}
