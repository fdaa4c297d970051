use std::io;

use bestresp_core::SweepResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chart::{render_best_response, render_profit_curve};

/// Which chart is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Best-response curve against the identity line
    #[default]
    BestResponse,
    /// π(·, e_j) for the selected sweep value
    ProfitCurve,
}

impl View {
    fn toggle(self) -> Self {
        match self {
            View::BestResponse => View::ProfitCurve,
            View::ProfitCurve => View::BestResponse,
        }
    }
}

/// Full-screen viewer for a finished sweep
pub struct PlotApp {
    result: SweepResult,
    view: View,
    selected: usize,
    exit: bool,
}

impl PlotApp {
    pub fn new(result: SweepResult) -> Self {
        Self {
            result,
            view: View::default(),
            selected: 0,
            exit: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Index of the sweep value shown in the profit-curve view
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// runs the viewer until the user closes it
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::debug!(points = self.result.len(), "Opening plot view");
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        tracing::debug!("Plot view closed");
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chart
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        match (self.view, self.result.points().get(self.selected)) {
            (View::ProfitCurve, Some(point)) => {
                render_profit_curve(frame, chunks[0], self.result.grid(), point)
            }
            _ => render_best_response(frame, chunks[0], &self.result),
        }

        frame.render_widget(self.hints(), chunks[1]);
    }

    fn hints(&self) -> Paragraph<'static> {
        let key = Style::default().fg(Color::Yellow);
        let text = Style::default().fg(Color::DarkGray);

        let mut spans = vec![
            Span::styled(" Tab", key),
            Span::styled(" switch view  ", text),
        ];
        if self.view == View::ProfitCurve {
            spans.push(Span::styled("←/→", key));
            spans.push(Span::styled(
                format!(" e_j {}/{}  ", self.selected + 1, self.result.len()),
                text,
            ));
        }
        spans.push(Span::styled("q", key));
        spans.push(Span::styled(" quit", text));

        Paragraph::new(Line::from(spans))
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Tab | KeyCode::BackTab => self.view = self.view.toggle(),
            KeyCode::Left | KeyCode::Char('h') if self.view == View::ProfitCurve => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') if self.view == View::ProfitCurve => {
                if self.selected + 1 < self.result.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }
}
