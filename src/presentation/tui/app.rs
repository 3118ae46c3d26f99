use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListState, Paragraph};
use ratatui::{Frame, Terminal};

use crate::application::services::session::ChatSession;
use crate::application::services::simulator::SimulatorService;
use crate::domain::entities::MachineProfile;
use crate::domain::ports::Assistant;
use crate::domain::simulation::SimulationRun;
use crate::domain::value_objects::ValidationError;
use crate::presentation::tui::event::ActivePanel;
use crate::presentation::tui::widgets::chart::render_chart;
use crate::presentation::tui::widgets::chat_panel::render_chat_panel;
use crate::presentation::tui::widgets::summary_panel::render_summary_panel;

const MIN_TICK_MS: u64 = 100;

struct App<'a> {
    simulator: &'a SimulatorService,
    session: ChatSession<'a>,
    run: SimulationRun,

    input: String,
    active_panel: ActivePanel,
    chat_state: ListState,

    should_quit: bool,
    tick_rate: Duration,
}

impl<'a> App<'a> {
    fn new(
        simulator: &'a SimulatorService,
        assistant: &'a dyn Assistant,
        machine: MachineProfile,
        tick_ms: u64,
    ) -> Result<Self, ValidationError> {
        let run = simulator.run()?;
        let session = ChatSession::new(assistant, run.summary, machine);
        Ok(Self {
            simulator,
            session,
            run,
            input: String::new(),
            active_panel: ActivePanel::default(),
            chat_state: ListState::default(),
            should_quit: false,
            tick_rate: Duration::from_millis(tick_ms.max(MIN_TICK_MS)),
        })
    }

    /// Replaces the series with a fresh run and rebinds the chat summary.
    fn regenerate(&mut self) {
        match self.simulator.run() {
            Ok(run) => {
                self.session.set_summary(run.summary);
                self.run = run;
            }
            Err(e) => tracing::warn!("falha ao regenerar a série: {e}"),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.active_panel == ActivePanel::Chat {
            self.handle_chat_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.active_panel = self.active_panel.next(),
            KeyCode::BackTab => self.active_panel = self.active_panel.prev(),
            KeyCode::Char('r') => self.regenerate(),
            _ => {}
        }
    }

    // The chat panel owns the keyboard while focused; printable keys feed
    // the input line instead of triggering shortcuts.
    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.active_panel = self.active_panel.next(),
            KeyCode::BackTab => self.active_panel = self.active_panel.prev(),
            KeyCode::Enter => self.submit_question(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => self.scroll_chat_up(),
            KeyCode::Down => self.scroll_chat_down(),
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn submit_question(&mut self) {
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return;
        }
        self.input.clear();

        // The event loop is synchronous; bridge into the runtime for the
        // assistant round-trip.
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(self.session.ask(&question))
        });

        // Follow the newest entry.
        let len = self.session.conversation().len();
        if len > 0 {
            self.chat_state.select(Some(len - 1));
        }
    }

    fn scroll_chat_down(&mut self) {
        let count = self.session.conversation().len();
        if count > 0 {
            let i = self
                .chat_state
                .selected()
                .map_or(0, |i| if i >= count - 1 { 0 } else { i + 1 });
            self.chat_state.select(Some(i));
        }
    }

    fn scroll_chat_up(&mut self) {
        let count = self.session.conversation().len();
        if count > 0 {
            let i = self
                .chat_state
                .selected()
                .map_or(count - 1, |i| if i == 0 { count - 1 } else { i - 1 });
            self.chat_state.select(Some(i));
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let [chart_area, lower_area] =
            Layout::vertical([Constraint::Length(10), Constraint::Fill(1)]).areas(body_area);

        let [summary_area, chat_area] =
            Layout::horizontal([Constraint::Length(44), Constraint::Fill(1)]).areas(lower_area);

        render_chart(
            frame,
            &self.run.series,
            self.active_panel == ActivePanel::Chart,
            chart_area,
        );
        render_summary_panel(
            frame,
            &self.run.summary,
            self.session.machine(),
            self.active_panel == ActivePanel::Summary,
            summary_area,
        );
        render_chat_panel(
            frame,
            self.session.conversation(),
            &self.input,
            &mut self.chat_state,
            self.active_panel == ActivePanel::Chat,
            chat_area,
        );

        self.render_status_bar(frame, status_area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let newest = self
            .run
            .series
            .newest()
            .timestamp
            .format("%d/%m %H:%M")
            .to_string();

        let header = Line::from(vec![
            Span::styled(
                " SEEP ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("│ "),
            Span::styled(
                format!("[{}]", self.active_panel),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" │ "),
            Span::styled(newest, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(header), area);
    }

    #[allow(clippy::unused_self)]
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        let bar = Line::from(vec![
            Span::styled(" q/Esc", key_style),
            Span::raw(":sair "),
            Span::styled("Tab", key_style),
            Span::raw(":painel "),
            Span::styled("r", key_style),
            Span::raw(":nova série "),
            Span::styled("Enter", key_style),
            Span::raw(":perguntar "),
            Span::styled("↑/↓", key_style),
            Span::raw(":histórico"),
        ]);

        frame.render_widget(
            Paragraph::new(bar).style(Style::default().bg(Color::DarkGray)),
            area,
        );
    }
}

/// Restore the terminal to its normal state.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        eprintln!("Falha ao desativar o modo raw: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        eprintln!("Falha ao sair da tela alternativa: {e}");
    }
}

/// Launch the interactive dashboard.
///
/// # Errors
///
/// Returns an error if the simulation parameters are rejected or if
/// terminal setup, rendering, or event handling fails.
pub fn run_tui(
    simulator: &SimulatorService,
    assistant: &dyn Assistant,
    machine: MachineProfile,
    tick_ms: u64,
) -> anyhow::Result<()> {
    // Validate parameters before touching the terminal.
    let mut app = App::new(simulator, assistant, machine, tick_ms)?;

    enable_raw_mode().context("Falha ao ativar o modo raw")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // Raw mode is already on; roll it back before returning the error
        let _ = disable_raw_mode();
        return Err(e).context("Falha ao entrar na tela alternativa");
    }

    // Install panic hook so terminal is restored even on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Falha ao criar o terminal")?;

    let result = run_app_loop(&mut terminal, &mut app);

    // Restore terminal on normal exit
    restore_terminal();
    let _ = terminal.show_cursor();

    // Restore the default panic hook
    let _ = std::panic::take_hook();

    result
}

fn run_app_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<'_>,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = app.tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let CrosstermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if last_tick.elapsed() >= app.tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
