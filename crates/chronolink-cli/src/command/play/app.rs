use std::{path::PathBuf, time::Duration};

use chronolink_engine::{GameConfig, Transition};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
};
use tracing::{error, info};

use crate::{
    driver::SessionDriver,
    tui::{App, Runtime},
    ui::widgets::{ResultDisplay, SessionHeader, StepDisplay, style},
};

const RENDER_INTERVAL_MS: u64 = 16;

/// Keys selecting the choices, in screen order.
const CHOICE_KEYS: &str = "1234";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    /// Answer with the choice at this screen position.
    Choose(usize),
    Restart,
    Abandon,
    Quit,
}

/// Maps a terminal event to an action. Only key presses count.
fn key_action(event: &Event) -> Option<KeyAction> {
    let key = event
        .as_key_event()
        .filter(|key| key.kind == KeyEventKind::Press)?;
    if let Some(index) = key.code.as_char().and_then(|c| CHOICE_KEYS.find(c)) {
        return Some(KeyAction::Choose(index));
    }
    match key.code {
        KeyCode::Char('r') => Some(KeyAction::Restart),
        KeyCode::Esc => Some(KeyAction::Abandon),
        KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}

#[derive(Debug)]
pub struct PlayApp {
    driver: SessionDriver,
    record_dir: Option<PathBuf>,
    saved_to: Option<String>,
    is_exiting: bool,
}

impl PlayApp {
    /// Results are saved into `record_dir` when it is given.
    pub fn new(driver: SessionDriver, record_dir: Option<PathBuf>) -> Self {
        Self {
            driver,
            record_dir,
            saved_to: None,
            is_exiting: false,
        }
    }

    fn start(&mut self) {
        self.saved_to = None;
        self.driver.start();
    }

    fn on_transition(&mut self, transition: Transition) {
        if !transition.is_terminal() {
            return;
        }
        let Some(record_dir) = &self.record_dir else {
            return;
        };
        let Some(record) = self.driver.result_record() else {
            return;
        };
        match record.save(record_dir) {
            Ok(path) => {
                info!(path = %path.display(), "result record saved");
                self.saved_to = Some(path.display().to_string());
            }
            Err(e) => error!("failed to save result record: {e:#}"),
        }
    }

    fn help_text(&self) -> &'static str {
        let session = self.driver.session();
        if session.is_feedback_phase() {
            "Controls: Esc (Abandon) | Q (Quit)"
        } else if session.is_playing() {
            "Controls: 1-4 (Answer) | Esc (Abandon) | Q (Quit)"
        } else if session.is_finished() {
            "Controls: R (Play again) | Esc (Title) | Q (Quit)"
        } else {
            "Controls: R (Start) | Q (Quit)"
        }
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("CHRONO LINK", style::TITLE)),
            Line::default(),
            Line::from(format!("Player: {}", self.driver.player_name())),
            Line::from(format!("Difficulty: {}", self.driver.difficulty())),
            Line::default(),
            Line::from(Span::styled("Press R to start", style::DIM)),
        ];
        frame.render_widget(
            Paragraph::new(Text::from(lines))
                .centered()
                .block(Block::bordered().style(style::DEFAULT)),
            area,
        );
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(GameConfig::tick_interval()));
        runtime.set_render_interval(Duration::from_millis(RENDER_INTERVAL_MS));
        self.start();
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        match key_action(event) {
            Some(KeyAction::Choose(index)) => {
                let transition = self.driver.on_choice(index);
                self.on_transition(transition);
            }
            Some(KeyAction::Restart) if !self.driver.session().is_playing() => self.start(),
            Some(KeyAction::Abandon) => {
                self.saved_to = None;
                self.driver.reset();
            }
            Some(KeyAction::Quit) => self.is_exiting = true,
            Some(KeyAction::Restart) | None => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let session = self.driver.session();
        let [header_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(14),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        if session.phase().is_idle() {
            self.draw_title(frame, main_area);
        } else {
            frame.render_widget(SessionHeader::new(session, self.driver.config()), header_area);
            if session.is_finished() {
                let result = ResultDisplay::new(session, self.driver.difficulty())
                    .saved_to(self.saved_to.as_deref());
                frame.render_widget(result, main_area);
            } else {
                frame.render_widget(StepDisplay::new(session), main_area);
            }
        }

        let help_text = Text::from(self.help_text())
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        let transition = self.driver.on_clock_tick();
        self.on_transition(transition);
    }
}
