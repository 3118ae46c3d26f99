use std::fmt;

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Chart,
    Summary,
    Chat,
}

impl ActivePanel {
    /// Cycle to the next panel.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Chart => Self::Summary,
            Self::Summary => Self::Chat,
            Self::Chat => Self::Chart,
        }
    }

    /// Cycle to the previous panel.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Chart => Self::Chat,
            Self::Summary => Self::Chart,
            Self::Chat => Self::Summary,
        }
    }
}

impl fmt::Display for ActivePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chart => write!(f, "Gráfico"),
            Self::Summary => write!(f, "Resumo"),
            Self::Chat => write!(f, "Conversa"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn active_panel_cycles_forward() {
        assert_eq!(ActivePanel::Chart.next(), ActivePanel::Summary);
        assert_eq!(ActivePanel::Summary.next(), ActivePanel::Chat);
        assert_eq!(ActivePanel::Chat.next(), ActivePanel::Chart);
    }

    #[test]
    fn active_panel_cycles_backward() {
        assert_eq!(ActivePanel::Chart.prev(), ActivePanel::Chat);
        assert_eq!(ActivePanel::Summary.prev(), ActivePanel::Chart);
        assert_eq!(ActivePanel::Chat.prev(), ActivePanel::Summary);
    }

    #[test]
    fn active_panel_display_portuguese() {
        assert_eq!(ActivePanel::Chart.to_string(), "Gráfico");
        assert_eq!(ActivePanel::Summary.to_string(), "Resumo");
        assert_eq!(ActivePanel::Chat.to_string(), "Conversa");
    }

    #[test]
    fn default_panel_is_chart() {
        assert_eq!(ActivePanel::default(), ActivePanel::Chart);
    }
}
