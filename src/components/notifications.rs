use crate::app::state::{Notice, NoticeKind};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

const MAX_WIDTH: u16 = 48;

/// Toast stack in the top-right corner, newest at the bottom.
pub struct Notifications<'a> {
    pub notices: &'a [Notice],
    pub theme: &'a Theme,
}

impl Widget for Notifications<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notices.is_empty() || area.width < 10 || area.height < 3 {
            return;
        }

        let width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let x = area.right().saturating_sub(width + 1);
        // Below the header row.
        let mut y = area.y + 1;

        for notice in self.notices {
            if y >= area.bottom() {
                break;
            }
            let (style, icon) = match notice.kind {
                NoticeKind::Info => (self.theme.notice_info, "i"),
                NoticeKind::Success => (self.theme.notice_success, "✓"),
                NoticeKind::Error => (self.theme.notice_error, "!"),
            };
            let rect = Rect::new(x, y, width, 1);
            Clear.render(rect, buf);
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {icon} "), style),
                Span::styled(format!(" {} ", notice.message), style),
            ]))
            .style(style)
            .render(rect, buf);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_renders_each_notice_on_its_own_row() {
        let theme = Theme::default();
        let notices = vec![
            Notice {
                kind: NoticeKind::Info,
                message: "Fetching latest news...".into(),
                created: Instant::now(),
            },
            Notice {
                kind: NoticeKind::Error,
                message: "Failed to fetch news".into(),
                created: Instant::now(),
            },
        ];
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        Notifications {
            notices: &notices,
            theme: &theme,
        }
        .render(area, &mut buf);

        let row = |y: u16| -> String { (0..80).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(1).contains("Fetching latest news..."));
        assert!(row(2).contains("Failed to fetch news"));
    }
}
