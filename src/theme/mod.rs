use crate::config::ThemeName;
use ratatui::style::{Modifier, Style};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub input_text: Style,
    pub input_cursor: Style,
    pub placeholder: Style,

    pub suggestion_symbol: Style,
    pub suggestion_name: Style,
    pub suggestion_selected: Style,

    pub article_title: Style,
    pub article_meta: Style,
    pub article_body: Style,
    pub symbol_tag: Style,
    pub sentiment_positive: Style,
    pub sentiment_negative: Style,
    pub sentiment_neutral: Style,

    pub notice_info: Style,
    pub notice_success: Style,
    pub notice_error: Style,

    pub status_ready: Style,
    pub status_busy: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_key: Style,
    pub footer_val: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Catppuccin => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            ThemeName::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),
            input_text: Style::default().fg(p.text),
            input_cursor: Style::default().bg(p.text).fg(p.crust),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),

            suggestion_symbol: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            suggestion_name: Style::default().fg(p.text),
            suggestion_selected: Style::default()
                .bg(p.surface1)
                .add_modifier(Modifier::BOLD),

            article_title: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            article_meta: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            article_body: Style::default().fg(p.text),
            symbol_tag: Style::default().bg(p.surface0).fg(p.text),
            sentiment_positive: Style::default().bg(p.green).fg(p.crust),
            sentiment_negative: Style::default().bg(p.red).fg(p.crust),
            sentiment_neutral: Style::default().bg(p.surface1).fg(p.text),

            notice_info: Style::default().bg(p.blue).fg(p.crust),
            notice_success: Style::default().bg(p.green).fg(p.crust),
            notice_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_busy: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.peach)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.mantle).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(ThemeName::default())
    }
}
