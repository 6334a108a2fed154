use crossbeam_channel::Sender;
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::Component;
use super::tooltip::Tooltip;
use crate::event::AppMsg;
use crate::model::content::{
    CHAR_TECHNIQUES, CHARACTERIZATION_DESCRIPTION, LITHO_TECHNIQUES, LITHOGRAPHY_DESCRIPTION,
};
use crate::model::section::{Category, TopicId};
use crate::widgets::common::focused_block;
use crate::widgets::theme::get_theme;

/// Main screen: two category panes, each with a process-guide action, a
/// technique list, and an info tooltip.
pub struct SelectorState {
    focused: Category,
    litho_list: ListState,
    char_list: ListState,
    litho_tooltip: Tooltip,
    char_tooltip: Tooltip,
    litho_info_rect: Rect,
    char_info_rect: Rect,
    tx: Option<Sender<AppMsg>>,
}

impl Default for SelectorState {
    fn default() -> Self {
        let mut litho_list = ListState::default();
        litho_list.select(Some(0));
        let mut char_list = ListState::default();
        char_list.select(Some(0));

        Self {
            focused: Category::Lithography,
            litho_list,
            char_list,
            litho_tooltip: Tooltip::new(LITHOGRAPHY_DESCRIPTION),
            char_tooltip: Tooltip::new(CHARACTERIZATION_DESCRIPTION),
            litho_info_rect: Rect::default(),
            char_info_rect: Rect::default(),
            tx: None,
        }
    }
}

impl SelectorState {
    pub fn set_sender(&mut self, tx: Sender<AppMsg>) {
        self.tx = Some(tx);
    }

    pub fn focused_category(&self) -> Category {
        self.focused
    }

    fn send(&self, msg: AppMsg) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(msg);
        }
    }

    fn technique_count(&self) -> usize {
        match self.focused {
            Category::Lithography => LITHO_TECHNIQUES.len(),
            Category::Characterization => CHAR_TECHNIQUES.len(),
        }
    }

    fn focused_list(&mut self) -> &mut ListState {
        match self.focused {
            Category::Lithography => &mut self.litho_list,
            Category::Characterization => &mut self.char_list,
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.technique_count();
        if len == 0 {
            return;
        }
        let list = self.focused_list();
        let i = match (list.selected(), down) {
            (Some(i), true) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            (Some(i), false) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            (None, _) => 0,
        };
        list.select(Some(i));
    }

    fn open_selected_technique(&mut self) {
        let ix = self.focused_list().selected().unwrap_or(0);
        let id = match self.focused {
            Category::Lithography => TopicId::LithoTechnique(ix),
            Category::Characterization => TopicId::CharTechnique(ix),
        };
        self.send(AppMsg::OpenTopic(id));
    }

    fn open_process_guide(&self) {
        let id = match self.focused {
            Category::Lithography => TopicId::LithoProcess,
            Category::Characterization => TopicId::CharProcess,
        };
        self.send(AppMsg::OpenTopic(id));
    }

    fn toggle_focused_tooltip(&mut self) {
        match self.focused {
            Category::Lithography => self.litho_tooltip.toggle(),
            Category::Characterization => self.char_tooltip.toggle(),
        }
    }

    fn render_pane(
        &mut self,
        category: Category,
        area: Rect,
        buf: &mut Buffer,
        is_focused: bool,
    ) {
        let theme = get_theme();
        let block = focused_block(category.label(), is_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("[p] ", Style::default().fg(theme.text_highlight)),
            Span::styled("Process guide", Style::default().fg(theme.text_primary)),
        ]))
        .render(chunks[0], buf);

        let info_line = Line::from(vec![
            Span::styled("[i] ", Style::default().fg(theme.text_highlight)),
            Span::styled(
                format!("about {} (hover)", category.label().to_lowercase()),
                Style::default().fg(theme.text_secondary),
            ),
        ]);
        Paragraph::new(info_line).render(chunks[1], buf);

        // remembered for pointer-hover hit testing
        match category {
            Category::Lithography => self.litho_info_rect = chunks[1],
            Category::Characterization => self.char_info_rect = chunks[1],
        }

        let techniques: &[&str] = match category {
            Category::Lithography => &LITHO_TECHNIQUES,
            Category::Characterization => &CHAR_TECHNIQUES,
        };
        let items: Vec<ListItem> = techniques
            .iter()
            .map(|name| ListItem::new(*name).style(Style::default().fg(theme.text_primary)))
            .collect();
        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.text_highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let list_state = match category {
            Category::Lithography => &mut self.litho_list,
            Category::Characterization => &mut self.char_list,
        };
        StatefulWidget::render(list, chunks[3], buf, list_state);
    }
}

impl Component for SelectorState {
    fn update(&mut self, msg: &AppMsg) -> Option<AppMsg> {
        match msg {
            AppMsg::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.focused = Category::Lithography,
                KeyCode::Right | KeyCode::Char('l') => self.focused = Category::Characterization,
                KeyCode::Tab => {
                    self.focused = match self.focused {
                        Category::Lithography => Category::Characterization,
                        Category::Characterization => Category::Lithography,
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
                KeyCode::Enter => self.open_selected_technique(),
                KeyCode::Char('p') => self.open_process_guide(),
                KeyCode::Char('i') => self.toggle_focused_tooltip(),
                _ => {}
            },
            AppMsg::PointerMoved(x, y) => {
                let pos = Position::new(*x, *y);
                self.litho_tooltip
                    .set_hover(self.litho_info_rect.contains(pos));
                self.char_tooltip
                    .set_hover(self.char_info_rect.contains(pos));
            }
            _ => {}
        }
        None
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, is_focused: bool) {
        let theme = get_theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        Paragraph::new("Select a technique (Enter) or open a process guide (p)")
            .style(Style::default().fg(theme.text_secondary))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_pane(
            Category::Lithography,
            panes[0],
            buf,
            is_focused && self.focused == Category::Lithography,
        );
        self.render_pane(
            Category::Characterization,
            panes[1],
            buf,
            is_focused && self.focused == Category::Characterization,
        );

        // tooltips draw above both panes
        self.litho_tooltip.render(self.litho_info_rect, area, buf);
        self.char_tooltip.render(self.char_info_rect, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> AppMsg {
        AppMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_opens_selected_technique() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut selector = SelectorState::default();
        selector.set_sender(tx);

        selector.update(&key(KeyCode::Down));
        selector.update(&key(KeyCode::Down));
        selector.update(&key(KeyCode::Enter));

        match rx.try_recv() {
            Ok(AppMsg::OpenTopic(TopicId::LithoTechnique(2))) => {}
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn process_guide_follows_focused_pane() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut selector = SelectorState::default();
        selector.set_sender(tx);

        selector.update(&key(KeyCode::Tab));
        assert_eq!(selector.focused_category(), Category::Characterization);
        selector.update(&key(KeyCode::Char('p')));

        match rx.try_recv() {
            Ok(AppMsg::OpenTopic(TopicId::CharProcess)) => {}
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn selection_wraps_around() {
        let mut selector = SelectorState::default();
        selector.update(&key(KeyCode::Up));
        assert_eq!(
            selector.focused_list().selected(),
            Some(LITHO_TECHNIQUES.len() - 1)
        );
        selector.update(&key(KeyCode::Down));
        assert_eq!(selector.focused_list().selected(), Some(0));
    }
}
