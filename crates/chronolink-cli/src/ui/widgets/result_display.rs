use chronolink_engine::{Difficulty, GameSession, final_score};
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Summary shown once a session is completed or over.
#[derive(Debug)]
pub struct ResultDisplay<'a> {
    session: &'a GameSession,
    difficulty: Difficulty,
    saved_to: Option<&'a str>,
}

impl<'a> ResultDisplay<'a> {
    pub fn new(session: &'a GameSession, difficulty: Difficulty) -> Self {
        Self {
            session,
            difficulty,
            saved_to: None,
        }
    }

    pub fn saved_to(mut self, path: Option<&'a str>) -> Self {
        self.saved_to = path;
        self
    }

    fn review_lines(&self) -> Vec<Line<'static>> {
        let route = self.session.route();
        self.session
            .mistaken_stage_indices()
            .iter()
            .filter_map(|&stage| route.get(stage))
            .map(|step| {
                let answer = step
                    .correct_choice()
                    .map_or_else(|| "?".to_owned(), |c| c.label.clone());
                Line::from(vec![
                    Span::raw(format!("  {} → ", step.subject.name)),
                    Span::styled(answer, style::WARNING),
                ])
            })
            .collect()
    }
}

impl Widget for ResultDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session;
        let Some(submission) = session.result_submission() else {
            return;
        };

        let (title, title_style) = if session.is_completed() {
            (" ROUTE CLEARED ", style::CORRECT)
        } else {
            (" GAME OVER ", style::WRONG)
        };
        let bonus = self.difficulty.life_bonus();
        let total = final_score(submission.base_score, submission.final_lives, self.difficulty);

        let mut lines = vec![
            Line::from(format!(
                "Cleared     {}/{}",
                submission.cleared_steps,
                session.total_stages()
            )),
            Line::from(format!("Score       {:>6}", submission.base_score)),
            Line::from(format!(
                "Life bonus  {:>6}  ({} x {bonus}, {})",
                submission.final_lives * bonus,
                submission.final_lives,
                self.difficulty,
            )),
            Line::from(Span::styled(format!("TOTAL       {total:>6}"), style::TITLE)),
        ];

        let review = self.review_lines();
        if !review.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Review", style::TITLE)));
            lines.extend(review);
        }
        if let Some(path) = self.saved_to {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(format!("Saved to {path}"), style::DIM)));
        }

        Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .title(Span::styled(title, title_style))
                    .style(style::DEFAULT),
            )
            .render(area, buf);
    }
}
