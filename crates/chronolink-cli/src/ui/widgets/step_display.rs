use chronolink_engine::{AnswerKind, Explanation, GameSession, Step, TermId};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Current step: its subject, the numbered choices and the last explanation.
#[derive(Debug)]
pub struct StepDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> StepDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    fn choice_style(&self, step: &Step, term_id: TermId) -> Style {
        let Some(pending) = self.session.pending_answer() else {
            return style::DEFAULT;
        };
        if step.is_correct(term_id) {
            style::CORRECT
        } else if pending.selected_term_id == Some(term_id) {
            style::WRONG
        } else {
            style::DIM
        }
    }

    fn verdict(&self) -> Option<Span<'static>> {
        let pending = self.session.pending_answer()?;
        let span = match (pending.kind, pending.is_correct) {
            (AnswerKind::TimedOut, _) => Span::styled(" TIME UP ", style::WRONG),
            (AnswerKind::Selected, true) => Span::styled(" CORRECT ", style::CORRECT),
            (AnswerKind::Selected, false) => Span::styled(" WRONG ", style::WRONG),
        };
        Some(span)
    }
}

impl Widget for StepDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StepDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [question_area, explanation_area] =
            Layout::vertical([Constraint::Length(8), Constraint::Fill(1)]).areas(area);

        if let Some(step) = self.session.current_step() {
            render_question(self, step, question_area, buf);
        }
        ExplanationPanel::new(self.session.explanation()).render(explanation_area, buf);
    }
}

fn render_question(display: &StepDisplay<'_>, step: &Step, area: Rect, buf: &mut Buffer) {
    let mut title = vec![Span::styled(" What comes next? ", style::TITLE)];
    title.extend(display.verdict());
    let block = Block::bordered().title(Line::from(title)).style(style::DEFAULT);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut subject = vec![Span::styled(step.subject.name.clone(), style::TITLE)];
    if !step.subject.era.is_empty() {
        subject.push(Span::styled(format!("  ({})", step.subject.era), style::DIM));
    }

    let mut lines = vec![Line::from(subject), Line::default()];
    lines.extend(step.choices.iter().enumerate().map(|(i, choice)| {
        Line::from(Span::styled(
            format!(" {} │ {} ", i + 1, choice.label),
            display.choice_style(step, choice.term_id),
        ))
    }));
    Paragraph::new(Text::from(lines)).render(inner, buf);
}

/// Relation between the last answered step and its successor.
#[derive(Debug)]
pub struct ExplanationPanel<'a> {
    explanation: Option<&'a Explanation>,
}

impl<'a> ExplanationPanel<'a> {
    pub fn new(explanation: Option<&'a Explanation>) -> Self {
        Self { explanation }
    }
}

impl Widget for ExplanationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" Link ", style::TITLE))
            .style(style::DEFAULT);
        let text = match self.explanation {
            Some(explanation) => Text::from(vec![
                Line::from(Span::styled(explanation.keyword.clone(), style::WARNING)),
                Line::from(explanation.explanation.clone()),
            ]),
            None => Text::from(Span::styled("-", style::DIM)),
        };
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
