use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Sparkline},
};

use crate::domain::entities::OccurrenceSeries;

pub fn render_chart(frame: &mut Frame, series: &OccurrenceSeries, is_focused: bool, area: Rect) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let counts: Vec<u64> = series.counts().collect();
    let max = counts.iter().copied().max().unwrap_or(0);

    let block = Block::default()
        .title(format!(
            "Ocorrências por hora — últimas {}h (máx {max})",
            series.len()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let sparkline = Sparkline::default()
        .block(block)
        .style(Style::default().fg(Color::LightBlue))
        .data(&counts);

    frame.render_widget(sparkline, area);
}
