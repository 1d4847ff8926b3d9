//! Markdown → ratatui `Text` renderer for advice answers.
//!
//! Walks `pulldown_cmark` events and emits styled `Line`/`Span` values.
//! Covers what the advice service actually returns: headings, paragraphs,
//! bold/italic, inline code, lists (nested, ordered), blockquotes, rules,
//! fenced code and links.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

const ACCENT: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;

/// Parse markdown into owned, styled `Text`.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        w.handle(event);
    }
    w.text
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline styles; each entry is patched onto its parent.
    styles: Vec<Style>,
    /// Prefix spans repeated on every line (blockquote bar, code gutter).
    prefixes: Vec<Span<'static>>,
    /// None = bullet list, Some(n) = ordered list at n.
    lists: Vec<Option<u64>>,
    in_code: bool,
    link: Option<String>,
    pending_gap: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            prefixes: vec![],
            lists: vec![],
            in_code: false,
            link: None,
            pending_gap: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn new_line(&mut self) {
        self.text.lines.push(Line::from(self.prefixes.clone()));
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => {
                self.new_line();
                self.push_span(span);
            }
        }
    }

    /// Start a block element, separated from the previous one by a blank line.
    fn open_block(&mut self) {
        if self.pending_gap {
            self.text.lines.push(Line::default());
            self.pending_gap = false;
        }
        self.new_line();
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.push_span(Span::styled(
                c.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.new_line(),
            Event::Rule => {
                self.open_block();
                self.push_span(Span::styled("─".repeat(32), Style::default().fg(MUTED)));
                self.pending_gap = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.open_block();
                } else if !self.item_line_is_empty() {
                    // Loose list items start their own line already
                    self.new_line();
                }
            }
            Tag::Heading { level, .. } => {
                self.open_block();
                self.push_style(heading_style(level));
            }
            Tag::BlockQuote(_) => {
                self.prefixes
                    .push(Span::styled("▌ ", Style::default().fg(MUTED)));
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(_) => {
                if self.pending_gap {
                    self.text.lines.push(Line::default());
                    self.pending_gap = false;
                }
                self.prefixes
                    .push(Span::styled("  ▏ ", Style::default().fg(MUTED)));
                self.in_code = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.pending_gap = self.pending_gap || !self.text.lines.is_empty();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                if self.pending_gap && self.lists.len() == 1 {
                    self.text.lines.push(Line::default());
                }
                self.pending_gap = false;
                self.new_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let m = format!("{indent}{n}. ");
                        *n += 1;
                        m
                    }
                    _ => format!("{indent}• "),
                };
                self.push_span(Span::styled(marker, Style::default().fg(ACCENT)));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link = Some(dest_url.to_string());
                self.push_style(Style::default().add_modifier(Modifier::UNDERLINED));
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.pending_gap = true;
                }
            }
            TagEnd::Heading(_) => {
                self.styles.pop();
                self.pending_gap = true;
            }
            TagEnd::BlockQuote(_) => {
                self.prefixes.pop();
                self.styles.pop();
                self.pending_gap = true;
            }
            TagEnd::CodeBlock => {
                self.prefixes.pop();
                self.in_code = false;
                self.pending_gap = true;
            }
            TagEnd::List(_) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.pending_gap = true;
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.styles.pop();
            }
            TagEnd::Link => {
                self.styles.pop();
                if let Some(url) = self.link.take() {
                    self.push_span(Span::styled(format!(" <{url}>"), Style::default().fg(MUTED)));
                }
            }
            _ => {}
        }
    }

    fn item_line_is_empty(&self) -> bool {
        // A list item line holds the prefixes plus its marker only
        self.text
            .lines
            .last()
            .is_some_and(|l| l.spans.len() == self.prefixes.len() + 1)
    }

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui draws '\t' as zero width
        let text = cow.replace('\t', "    ");

        if self.in_code {
            let style = Style::default().fg(Color::Gray);
            for line in text.lines() {
                self.new_line();
                self.push_span(Span::styled(line.to_string(), style));
            }
            return;
        }

        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let base = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => base.add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => base,
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}
