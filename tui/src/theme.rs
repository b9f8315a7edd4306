use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Colors for one theme. Picked from the persisted dark-mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub border: Color,
}

impl Palette {
    pub(crate) const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 250),
        foreground: Color::Rgb(33, 33, 33),
        accent: Color::Rgb(25, 118, 210),
        muted: Color::Rgb(117, 117, 117),
        error: Color::Rgb(198, 40, 40),
        border: Color::Rgb(189, 189, 189),
    };

    pub(crate) const DARK: Palette = Palette {
        background: Color::Rgb(18, 18, 18),
        foreground: Color::Rgb(236, 236, 236),
        accent: Color::Rgb(144, 202, 249),
        muted: Color::Rgb(158, 158, 158),
        error: Color::Rgb(239, 154, 154),
        border: Color::Rgb(66, 66, 66),
    };

    pub(crate) fn for_dark_mode(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }

    pub(crate) fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub(crate) fn dim(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub(crate) fn focused(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error(&self) -> Style {
        self.base().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn border(&self, focused: bool) -> Style {
        if focused {
            self.base().fg(self.accent)
        } else {
            self.base().fg(self.border)
        }
    }
}
