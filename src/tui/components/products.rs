//! # Products Screen
//!
//! Category chips above a product list, plus the product-detail overlay.
//! ←/→ change the category, ↑/↓ move the selection, Enter opens the detail.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, ListState, Padding, Paragraph, Row, Table, Wrap};

use crate::core::catalog::{CategoryFilter, Product, filter_products};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductsEvent {
    Open(&'static str),
}

/// Persistent state for the products list.
#[derive(Debug, Default)]
pub struct ProductsState {
    /// Index into `CategoryFilter::CHIPS`.
    pub chip: usize,
    pub selected: usize,
    pub list_state: ListState,
}

impl ProductsState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.list_state.select(Some(0));
        state
    }

    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::CHIPS[self.chip]
    }

    pub fn visible(&self) -> Vec<&'static Product> {
        filter_products(self.filter())
    }

    fn set_chip(&mut self, chip: usize) {
        self.chip = chip;
        self.selected = 0;
        let has_items = !self.visible().is_empty();
        self.list_state.select(has_items.then_some(0));
    }
}

impl EventHandler for ProductsState {
    type Event = ProductsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ProductsEvent> {
        let chips = CategoryFilter::CHIPS.len();
        match event {
            TuiEvent::CursorLeft | TuiEvent::BackTab => {
                self.set_chip((self.chip + chips - 1) % chips);
                None
            }
            TuiEvent::CursorRight | TuiEvent::Tab => {
                self.set_chip((self.chip + 1) % chips);
                None
            }
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                let len = self.visible().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .visible()
                .get(self.selected)
                .map(|p| ProductsEvent::Open(p.id)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the products list.
pub struct ProductsView<'a> {
    pub state: &'a mut ProductsState,
}

impl ProductsView<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [chips_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let mut chips: Vec<Span> = Vec::new();
        for (i, chip) in CategoryFilter::CHIPS.iter().enumerate() {
            let style = if i == self.state.chip {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            chips.push(Span::styled(format!(" {} ", chip.label()), style));
            chips.push(Span::raw(" "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(chips))
                .block(
                    Block::default()
                        .borders(Borders::BOTTOM)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(" Danh mục sản phẩm "),
                )
                .wrap(Wrap { trim: false }),
            chips_area,
        );

        let products = self.state.visible();
        if products.is_empty() {
            let empty = Paragraph::new("Chưa có sản phẩm trong mục này")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(empty, list_area);
            return;
        }

        let items: Vec<ListItem> = products
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let selected = i == self.state.selected;
                let name_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                };
                let specs: Vec<String> = p
                    .specs
                    .iter()
                    .take(2)
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect();
                ListItem::new(vec![
                    Line::from(Span::styled(p.name, name_style)),
                    Line::from(Span::styled(
                        format!("MODEL: {}", p.model),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(Span::styled(
                        specs.join("  ·  "),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::default(),
                ])
            })
            .collect();

        let list = List::new(items).block(Block::default().padding(Padding::horizontal(1)));
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

/// Detail overlay for one product.
pub fn render_product_detail(frame: &mut Frame, area: Rect, product: &Product) {
    let [head, specs_area, foot] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    let price = product.price.unwrap_or("Liên hệ");
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            product.name,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("MODEL: ", Style::default().fg(Color::DarkGray)),
            Span::raw(product.model),
            Span::styled("   Danh mục: ", Style::default().fg(Color::DarkGray)),
            Span::raw(product.category.label()),
        ]),
        Line::from(vec![
            Span::styled("Giá: ", Style::default().fg(Color::DarkGray)),
            Span::styled(price, Style::default().fg(Color::Green)),
            Span::styled("   Bảo hành: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} tháng", product.warranty_months)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            product.image,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(header, head);

    let rows: Vec<Row> = product
        .specs
        .iter()
        .map(|(k, v)| {
            Row::new(vec![
                Cell::from(Span::styled(*k, Style::default().fg(Color::Gray))),
                Cell::from(*v),
            ])
        })
        .collect();
    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Thông số kỹ thuật "),
    );
    frame.render_widget(table, specs_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Enter/Esc Đóng ",
            Style::default().fg(Color::DarkGray),
        )),
        foot,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ProductCategory;

    #[test]
    fn test_enter_opens_first_product() {
        let mut state = ProductsState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ProductsEvent::Open("p1")));
    }

    #[test]
    fn test_chip_change_resets_selection() {
        let mut state = ProductsState::new();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.filter(), CategoryFilter::Only(ProductCategory::Panel));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_chips_wrap_around() {
        let mut state = ProductsState::new();
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.chip, CategoryFilter::CHIPS.len() - 1);
    }

    #[test]
    fn test_empty_category_opens_nothing() {
        let mut state = ProductsState::new();
        let diy = CategoryFilter::CHIPS
            .iter()
            .position(|c| *c == CategoryFilter::Only(ProductCategory::DiyCombo))
            .unwrap();
        state.set_chip(diy);
        assert!(state.visible().is_empty());
        assert_eq!(state.list_state.selected(), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut state = ProductsState::new();
        for _ in 0..20 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, state.visible().len() - 1);
    }
}
