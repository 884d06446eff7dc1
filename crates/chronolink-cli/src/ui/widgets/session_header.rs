use chronolink_engine::{GameConfig, GameSession};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Countdown below which the gauge turns red.
const LOW_TIME_TICKS: u32 = 50;

/// Stage, lives, score and countdown of a session.
#[derive(Debug)]
pub struct SessionHeader<'a> {
    session: &'a GameSession,
    max_ticks: u32,
}

impl<'a> SessionHeader<'a> {
    pub fn new(session: &'a GameSession, config: &GameConfig) -> Self {
        Self {
            session,
            max_ticks: config.max_ticks,
        }
    }

    fn stage_label(&self) -> String {
        let total = self.session.total_stages();
        let stage = (self.session.current_stage() + 1).min(total.max(1));
        format!("STAGE {stage}/{total}")
    }

    fn time_ratio(&self) -> f64 {
        if self.max_ticks == 0 {
            return 0.0;
        }
        (f64::from(self.session.remaining_ticks()) / f64::from(self.max_ticks)).clamp(0.0, 1.0)
    }
}

impl Widget for SessionHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session;
        let block = Block::bordered().style(style::DEFAULT);
        let inner = block.inner(area);
        block.render(area, buf);

        let [stats_area, gauge_area] =
            Layout::horizontal([Constraint::Length(44), Constraint::Fill(1)]).areas(inner);

        let hearts = "♥ ".repeat(session.lives() as usize);
        let stats = Line::from(vec![
            Span::styled(self.stage_label(), style::TITLE),
            Span::raw("  "),
            Span::styled(format!("{hearts:<8}"), style::LIFE),
            Span::raw(format!(" SCORE {:>6}", session.score())),
        ]);
        Paragraph::new(stats).render(stats_area, buf);

        let remaining = session.remaining_ticks();
        let gauge_style = if remaining <= LOW_TIME_TICKS {
            style::GAUGE_LOW
        } else {
            style::GAUGE_OK
        };
        let label = if session.is_feedback_phase() {
            format!("{:.1}s (paused)", GameConfig::ticks_to_secs(remaining))
        } else {
            format!("{:.1}s", GameConfig::ticks_to_secs(remaining))
        };
        Gauge::default()
            .gauge_style(gauge_style)
            .ratio(self.time_ratio())
            .label(label)
            .render(gauge_area, buf);
    }
}
