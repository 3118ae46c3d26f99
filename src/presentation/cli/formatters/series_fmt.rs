use colored::Colorize;

use crate::domain::entities::OccurrenceSeries;

const RAMP: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One character per hour, scaled to the highest count in the slice.
#[must_use]
pub fn sparkline(counts: &[u64]) -> String {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return RAMP[0].to_string().repeat(counts.len());
    }

    counts
        .iter()
        .map(|&count| {
            #[allow(
                clippy::cast_precision_loss,
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            let idx = ((count as f64 / max as f64) * (RAMP.len() - 1) as f64).round() as usize;
            RAMP[idx]
        })
        .collect()
}

/// Prints the series as a sparkline with its time range underneath.
pub fn print_series(series: &OccurrenceSeries) {
    let counts: Vec<u64> = series.counts().collect();
    println!("{}", sparkline(&counts));

    let oldest = series.oldest().timestamp.format("%d/%m %H:%M");
    let newest = series.newest().timestamp.format("%d/%m %H:%M");
    let max = counts.iter().copied().max().unwrap_or(0);
    println!(
        "{}",
        format!("{oldest} a {newest} (máx {max}/h)").dimmed()
    );
}
