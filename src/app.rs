use std::io;

use anyhow::Result;
use crossbeam_channel::{Receiver, Sender, unbounded};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};
use ratatui_image::picker::Picker;

use crate::components::{
    Component, logs::LogsState, popup::PopupWindow, scroll_panel::ScrollRouter,
    selector::SelectorState,
};
use crate::config::Config;
use crate::event::{AppMsg, WheelDirection};
use crate::model::content;
use crate::model::section::TopicId;
use crate::widgets::theme::get_theme;

pub struct App {
    config: Config,
    picker: Picker,
    selector: SelectorState,
    logs: LogsState,
    popup: Option<PopupWindow>,
    router: ScrollRouter,
    tx: Sender<AppMsg>,
    rx: Receiver<AppMsg>,
    should_quit: bool,
}

impl App {
    pub fn new_with_picker(picker: Picker) -> Self {
        let (tx, rx) = unbounded();
        let mut selector = SelectorState::default();
        selector.set_sender(tx.clone());

        Self {
            config: Config::default(),
            picker,
            selector,
            logs: LogsState::default(),
            popup: None,
            router: ScrollRouter::default(),
            tx,
            rx,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let tick_rate = self.config.frame_interval;
        let mut res: Result<()> = Ok(());

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            } else if let Some(popup) = self.popup.as_mut() {
                popup.update(&AppMsg::Tick);
            }

            self.drain_messages();
        }

        // external close signal path: an open popup runs the same teardown
        // as an explicit dismissal
        self.close_popup();

        if let Err(e) = restore_terminal(&mut terminal) {
            res = Err(e);
        }
        res
    }

    fn render(&mut self, f: &mut Frame) {
        let theme = get_theme();
        let area = f.area();
        let buf = f.buffer_mut();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(5),
            ])
            .split(area);

        let header = Paragraph::new("Characterization and Lithography Reference")
            .style(Style::default().fg(theme.heading))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("fabviewtui"));
        header.render(chunks[0], buf);

        self.selector.render(chunks[1], buf, self.popup.is_none());
        self.logs.render(chunks[2], buf, false);

        if let Some(popup) = self.popup.as_mut() {
            popup.render(area, buf, true);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.popup.is_some() {
            let dismissed = matches!(
                self.popup
                    .as_mut()
                    .and_then(|popup| popup.update(&AppMsg::Key(key))),
                Some(AppMsg::PopupDismissed)
            );
            if dismissed {
                self.close_popup();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            _ => {
                self.selector.update(&AppMsg::Key(key));
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.route_wheel(WheelDirection::Up),
            MouseEventKind::ScrollDown => self.route_wheel(WheelDirection::Down),
            MouseEventKind::Moved => {
                if self.popup.is_none() {
                    self.selector
                        .update(&AppMsg::PointerMoved(mouse.column, mouse.row));
                }
            }
            _ => {}
        }
    }

    /// Wheel events reach only the popup that holds the active binding.
    fn route_wheel(&mut self, direction: WheelDirection) {
        if let Some(popup) = self.popup.as_mut() {
            let routed = match popup.scroll_binding() {
                Some(binding) => self.router.routes_to(binding),
                None => false,
            };
            if routed {
                popup.update(&AppMsg::Wheel(direction));
            }
        }
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AppMsg::OpenTopic(id) => self.open_popup(id),
                AppMsg::PopupDismissed => self.close_popup(),
                AppMsg::Quit => self.should_quit = true,
                AppMsg::LogMessage(_) | AppMsg::ErrorOccurred(_) => {
                    self.logs.update(&msg);
                }
                _ => {}
            }
        }
    }

    /// Popups are modal: opening a new topic tears the previous window down
    /// first so its timers and binding never outlive it.
    fn open_popup(&mut self, id: TopicId) {
        self.close_popup();
        self.popup = Some(PopupWindow::open(
            &mut self.picker,
            content::topic(id),
            &self.config,
            &mut self.router,
            &self.tx,
        ));
    }

    fn close_popup(&mut self) {
        if let Some(mut popup) = self.popup.take() {
            popup.close(&mut self.router);
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    terminal.show_cursor().ok();
    disable_raw_mode().ok();
    // LeaveAlternateScreen must be executed on the same stdout the backend uses
    let mut out = io::stdout();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new_with_picker(Picker::from_fontsize((8, 16)))
    }

    #[test]
    fn open_then_close_leaves_no_bindings_or_timers() {
        let mut app = test_app();
        app.open_popup(TopicId::LithoProcess);
        assert!(app.popup.is_some());
        assert!(app.router.is_bound());

        app.close_popup();
        assert!(app.popup.is_none());
        assert!(!app.router.is_bound());

        // closing with nothing open is a no-op
        app.close_popup();
        assert!(!app.router.is_bound());
    }

    #[test]
    fn opening_a_second_topic_replaces_the_first() {
        let mut app = test_app();
        app.open_popup(TopicId::LithoProcess);
        app.open_popup(TopicId::CharProcess);

        assert!(app.popup.is_some());
        // exactly one binding alive: the replacement's
        assert!(app.router.is_bound());
        let popup = app.popup.as_ref().expect("popup open");
        let binding = popup.scroll_binding().expect("popup holds binding");
        assert!(app.router.routes_to(binding));
    }

    #[test]
    fn selector_messages_open_popups() {
        let mut app = test_app();
        app.tx
            .send(AppMsg::OpenTopic(TopicId::CharTechnique(1)))
            .unwrap();
        app.drain_messages();
        assert!(app.popup.is_some());
    }

    #[test]
    fn unavailable_assets_end_up_in_the_log_pane() {
        let mut app = test_app();
        // default config points at directories that do not exist here
        app.open_popup(TopicId::LithoProcess);
        app.drain_messages();
        assert!(!app.logs.entries().is_empty());
        assert!(app.logs.entries()[0].contains("unavailable"));
    }
}
