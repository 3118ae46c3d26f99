use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::domain::entities::{MachineProfile, Summary};

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn authorized_span(authorized: bool) -> Span<'static> {
    if authorized {
        Span::styled("sim", Style::default().fg(Color::Green))
    } else {
        Span::styled("não", Style::default().fg(Color::Red))
    }
}

pub fn render_summary_panel(
    frame: &mut Frame,
    summary: &Summary,
    machine: &MachineProfile,
    is_focused: bool,
    area: Rect,
) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title("Resumo")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let lines = vec![
        Line::from(vec![
            label("Média/h: "),
            Span::raw(format!("{:.2}", summary.mean)),
        ]),
        Line::from(vec![
            label("Máximo/h: "),
            Span::styled(summary.max.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            label("Hora do pico: "),
            Span::styled(
                summary.peak_time.format("%H:%M").to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            label("Total: "),
            Span::raw(summary.total.to_string()),
        ]),
        Line::from(""),
        Line::from(vec![label("Empresa: "), Span::raw(machine.company.clone())]),
        Line::from(vec![
            label("Máquina: "),
            Span::raw(machine.machine_id.clone()),
        ]),
        Line::from(vec![label("Defeito: "), Span::raw(machine.defect.clone())]),
        Line::from(vec![label("Chamado: "), Span::raw(machine.ticket.clone())]),
        Line::from(vec![
            label("Autorizado: "),
            authorized_span(machine.authorized),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
