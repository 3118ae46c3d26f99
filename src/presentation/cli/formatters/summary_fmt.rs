use colored::Colorize;

use crate::domain::entities::Summary;

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

/// Prints the four headline figures of a monitored window.
pub fn print_summary(summary: &Summary) {
    println!("{}: {:.2}", "Média/h".bold(), summary.mean);
    println!("{}: {}", "Máximo/h".bold(), summary.max.to_string().red());
    println!(
        "{}: {}",
        "Hora do pico".bold(),
        peak_time_label(summary).yellow()
    );
    println!("{}: {}", "Total".bold(), summary.total);
}

/// Peak hour in wall-clock form, e.g. `17:00`.
#[must_use]
pub fn peak_time_label(summary: &Summary) -> String {
    summary.peak_time.format("%H:%M").to_string()
}
