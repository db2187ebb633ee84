//! The interactive terminal client.
//!
//! A single-threaded event loop over the same engine the CLI commands use.
//! Every state transition happens in response to one input event; the poll
//! tick only redraws, so the contact form's settling window expires on its
//! own and language switches apply to the very next frame.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::carousel::CarouselState;
use crate::catalog;
use crate::config::Config;
use crate::contact::{property_inquiry, whatsapp_url, ContactForm, ProjectType};
use crate::detail::DetailView;
use crate::filter::{self, FilterCriteria, PriceBucket, PriceThresholds, TypeFilter};
use crate::i18n::{Lang, Translator};
use crate::models::{format_price, PropertyRecord, PropertyType};
use crate::nav::{view_title, Router, View, Viewport};

const ACCENT: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;

const TICK: Duration = Duration::from_millis(120);

/// Scroll surface of the client. The router zeroes it on every navigation,
/// strictly after the view change is committed.
#[derive(Debug, Default)]
struct TuiViewport {
    scroll: u16,
}

impl Viewport for TuiViewport {
    fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}

/// Focus ring of the contact view, walked with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormFocus {
    Project,
    Name,
    Email,
    Phone,
    Field1,
    Field2,
    Details,
    Submit,
}

impl FormFocus {
    const RING: [FormFocus; 8] = [
        FormFocus::Project,
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Phone,
        FormFocus::Field1,
        FormFocus::Field2,
        FormFocus::Details,
        FormFocus::Submit,
    ];

    fn next(&self) -> FormFocus {
        let i = Self::RING.iter().position(|f| f == self).unwrap_or(0);
        Self::RING[(i + 1) % Self::RING.len()]
    }

    fn prev(&self) -> FormFocus {
        let i = Self::RING.iter().position(|f| f == self).unwrap_or(0);
        Self::RING[(i + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// Text fields capture printable keys, so global shortcuts are off
    /// while one is focused.
    fn is_text(&self) -> bool {
        !matches!(self, FormFocus::Project | FormFocus::Submit)
    }
}

/// Root controller state of the client.
pub struct App {
    config: Config,
    thresholds: PriceThresholds,
    translator: Translator,
    router: Router<TuiViewport>,
    criteria: FilterCriteria,
    results: Option<Vec<&'static PropertyRecord>>,
    list_index: usize,
    featured_index: usize,
    carousel: Option<CarouselState>,
    form: ContactForm,
    focus: FormFocus,
    notice: Option<String>,
    handoff_link: Option<String>,
}

impl App {
    pub fn new(config: Config, lang: Lang) -> Self {
        let thresholds = PriceThresholds::from_config(&config);
        Self {
            thresholds,
            translator: Translator::new(lang),
            router: Router::new(TuiViewport::default()),
            criteria: FilterCriteria::default(),
            results: None,
            list_index: 0,
            featured_index: 0,
            carousel: None,
            form: ContactForm::new(),
            focus: FormFocus::Project,
            notice: None,
            handoff_link: None,
            config,
        }
    }

    /// Handles one key press. Returns true when the client should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.router.current_view() == View::Contact {
            return self.handle_contact_key(key);
        }
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('l') => self.cycle_language(),
            KeyCode::Char(c @ '1'..='4')
                if self.router.current_view() != View::PropertyDetail =>
            {
                self.jump_menu(c)
            }
            code => match self.router.current_view() {
                View::Home => self.handle_home_key(code),
                View::Properties => self.handle_properties_key(code),
                View::PropertyDetail => self.handle_detail_key(code),
                _ => self.handle_about_key(code),
            },
        }
        false
    }

    /// Routes to `view` and performs the view's entry work: the listing
    /// recomputes its results, the detail page retargets the carousel.
    /// Leaving the listing drops its filters and results entirely.
    fn navigate(&mut self, view: View, id: Option<&str>) {
        let was_listing = self.router.current_view() == View::Properties;
        self.router.navigate(view, id);
        if was_listing && view != View::Properties {
            self.criteria.reset();
            self.results = None;
            self.list_index = 0;
        }
        match view {
            View::Properties => self.refresh_results(),
            View::PropertyDetail => self.target_carousel(),
            View::Contact => {
                self.focus = FormFocus::Project;
                self.notice = None;
            }
            _ => {}
        }
    }

    fn jump_menu(&mut self, digit: char) {
        let i = (digit as u8 - b'1') as usize;
        self.navigate(View::MENU[i], None);
    }

    fn cycle_language(&mut self) {
        let next = self.translator.active().next();
        self.translator.set_active(next);
    }

    fn refresh_results(&mut self) {
        let records = filter::filter(catalog::catalog(), self.criteria, &self.thresholds);
        if self.list_index >= records.len() {
            self.list_index = 0;
        }
        self.results = Some(records);
    }

    fn target_carousel(&mut self) {
        let record = self.router.selected_property_id().and_then(catalog::lookup);
        if let Some(record) = record {
            match &mut self.carousel {
                Some(car) => car.retarget(record),
                None => self.carousel = Some(CarouselState::for_property(record)),
            }
        }
    }

    fn scroll_up(&mut self) {
        let vp = self.router.viewport_mut();
        vp.scroll = vp.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let vp = self.router.viewport_mut();
        vp.scroll = vp.scroll.saturating_add(1);
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.featured_index = self.featured_index.saturating_sub(1),
            KeyCode::Down => {
                if self.featured_index + 1 < catalog::featured().len() {
                    self.featured_index += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(record) = catalog::featured().get(self.featured_index) {
                    let id = record.id.clone();
                    self.navigate(View::PropertyDetail, Some(&id));
                }
            }
            _ => {}
        }
    }

    fn handle_properties_key(&mut self, code: KeyCode) {
        let visible = self.results.as_deref().map_or(0, <[_]>::len);
        match code {
            KeyCode::Up => self.list_index = self.list_index.saturating_sub(1),
            KeyCode::Down => {
                if self.list_index + 1 < visible {
                    self.list_index += 1;
                }
            }
            KeyCode::Enter => {
                let record = self
                    .results
                    .as_deref()
                    .and_then(|r| r.get(self.list_index).copied());
                if let Some(record) = record {
                    self.navigate(View::PropertyDetail, Some(&record.id));
                }
            }
            KeyCode::Char('f') => {
                self.criteria.type_filter = self.criteria.type_filter.next();
                self.list_index = 0;
                self.refresh_results();
            }
            KeyCode::Char('b') => {
                self.criteria.price_bucket = self.criteria.price_bucket.next();
                self.list_index = 0;
                self.refresh_results();
            }
            KeyCode::Char('r') => {
                if !self.criteria.is_default() {
                    self.criteria.reset();
                    self.list_index = 0;
                    self.refresh_results();
                }
            }
            KeyCode::Esc => self.navigate(View::Home, None),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                if let Some(car) = &mut self.carousel {
                    car.prev();
                }
            }
            KeyCode::Right => {
                if let Some(car) = &mut self.carousel {
                    car.next();
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Out-of-range thumbnails are a no-op, not a crash.
                if let Some(car) = &mut self.carousel {
                    let _ = car.select((c as u8 - b'1') as usize);
                }
            }
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Esc => self.navigate(View::Properties, None),
            _ => {}
        }
    }

    fn handle_about_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Esc => self.navigate(View::Home, None),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Esc => {
                if self.focus.is_text() {
                    self.focus = FormFocus::Project;
                } else {
                    self.navigate(View::Home, None);
                }
            }
            KeyCode::Enter => {
                if self.focus == FormFocus::Submit {
                    self.submit_form();
                } else {
                    self.focus = self.focus.next();
                }
            }
            KeyCode::Left if self.focus == FormFocus::Project => self.cycle_project(-1),
            KeyCode::Right if self.focus == FormFocus::Project => self.cycle_project(1),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if self.focus.is_text() {
                    if let Some(field) = self.focused_field_mut() {
                        field.push(c);
                    }
                } else {
                    match c {
                        'q' => return true,
                        'l' => self.cycle_language(),
                        '1'..='4' => self.jump_menu(c),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        false
    }

    fn cycle_project(&mut self, step: i32) {
        let all = ProjectType::ALL;
        let i = all
            .iter()
            .position(|p| *p == self.form.project_type())
            .unwrap_or(0);
        let n = all.len() as i32;
        let next = (i as i32 + step).rem_euclid(n) as usize;
        self.form.set_project_type(all[next]);
    }

    fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Name => Some(&mut self.form.name),
            FormFocus::Email => Some(&mut self.form.email),
            FormFocus::Phone => Some(&mut self.form.phone),
            FormFocus::Field1 => Some(&mut self.form.field1),
            FormFocus::Field2 => Some(&mut self.form.field2),
            FormFocus::Details => Some(&mut self.form.details),
            FormFocus::Project | FormFocus::Submit => None,
        }
    }

    fn submit_form(&mut self) {
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            let labels: Vec<String> = missing.iter().map(|k| self.translator.t(k)).collect();
            self.notice = Some(labels.join(" · "));
            return;
        }
        if self.form.begin_submit(Instant::now()) {
            let message = self.form.build_message(&self.translator);
            self.handoff_link = Some(whatsapp_url(&self.config.contact.whatsapp, &message));
            self.notice = None;
        }
    }
}

/// CLI entry point for `vitrine browse`.
pub fn run_browse(config: &Config, lang_arg: Option<&str>) -> Result<()> {
    let lang = match lang_arg {
        Some(code) => Lang::from_code(code)?,
        None => config.default_lang(),
    };
    let mut app = App::new(config.clone(), lang);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal even when a draw panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.router.current_view() {
        View::Home => render_home(frame, app, chunks[1]),
        View::Properties => render_properties(frame, app, chunks[1]),
        View::PropertyDetail => render_detail(frame, app, chunks[1]),
        View::About => render_about(frame, app, chunks[1]),
        View::Contact => render_contact(frame, app, chunks[1]),
    }
    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let brand = Line::from(vec![
        Span::styled(
            app.config.agency.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.translator.t("navbar.tagline"), Style::default().fg(MUTED)),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", app.translator.active().code()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let active_key = app.router.current_view().menu_key();
    let mut menu = Vec::new();
    for (i, view) in View::MENU.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, app.translator.t(view.menu_key()));
        let style = if view.menu_key() == active_key {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        menu.push(Span::styled(label, style));
    }

    let header = Paragraph::new(vec![brand, Line::from(menu)])
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.router.current_view() {
        View::Home => "↑/↓ select · Enter open · 1-4 menu · l language · q quit",
        View::Properties => "↑/↓ select · Enter open · f type · b price · r reset · Esc home · q quit",
        View::PropertyDetail => "←/→ images · 1-9 image · ↑/↓ scroll · Esc back · q quit",
        View::About => "↑/↓ scroll · 1-4 menu · l language · q quit",
        View::Contact => "Tab next field · Enter validate · ←/→ project · Esc unfocus · q quit",
    };
    let footer = Paragraph::new(Line::from(Span::styled(hints, Style::default().fg(MUTED))));
    frame.render_widget(footer, area);
}

fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.translator;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    let stats = Line::from(vec![
        Span::styled("300+ ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(t.t("home.stats.assets"), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("500+ ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(t.t("home.stats.clients"), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled("10+ ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(t.t("home.stats.experience"), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(t.t("home.stats.zoneValue"), Style::default().fg(Color::Gray)),
    ]);

    let mut lines = vec![
        Line::from(Span::styled(
            t.t("home.hero.tagline"),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            format!("{} {}", t.t("home.hero.title1"), t.t("home.hero.title2")),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(t.t("home.hero.description")),
        Line::raw(""),
        stats,
        Line::raw(""),
    ];
    for section in ["analysis", "security", "execution"] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", t.t(&format!("home.method.{}.title", section))),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                t.t(&format!("home.method.{}.text", section)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    let hero = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(hero, chunks[0]);

    let items: Vec<ListItem> = catalog::featured()
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(p.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(p.location.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(
                    format!(
                        "{} {}",
                        t.t("home.opportunities.price"),
                        format_price(p.price, &app.config.pricing.currency)
                    ),
                    Style::default().fg(ACCENT),
                ),
            ]))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(app.featured_index.min(catalog::featured().len().saturating_sub(1))));
    let featured = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(t.t("home.opportunities.title")),
        )
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)).fg(ACCENT))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(featured, chunks[1], &mut state);

    let cta = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{}  ", t.t("home.cta.title")),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(t.t("home.cta.text"), Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            format!("[4] {}", t.t("home.cta.button")),
            Style::default().fg(ACCENT),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(cta, chunks[2]);
}

fn render_properties(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.translator;
    let results = app.results.as_deref().unwrap_or(&[]);
    let commerce = app.criteria.type_filter == TypeFilter::Only(PropertyType::Commerce);

    let mut constraints = vec![Constraint::Length(3)];
    if commerce {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(4));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Filter bar: the type tabs and the price bucket cycle.
    let mut type_spans = vec![Span::styled("type  ", Style::default().fg(MUTED))];
    for tf in TypeFilter::CYCLE {
        let style = if tf == app.criteria.type_filter {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        type_spans.push(Span::styled(format!(" {} ", t.t(tf.label_key())), style));
    }
    let mut price_spans = vec![Span::styled("price ", Style::default().fg(MUTED))];
    for pb in PriceBucket::CYCLE {
        let style = if pb == app.criteria.price_bucket {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        price_spans.push(Span::styled(format!(" {} ", pb.wire_name()), style));
    }
    if app.criteria.price_bucket != PriceBucket::All {
        price_spans.push(Span::styled(
            format!(
                "  {}",
                app.criteria
                    .price_bucket
                    .bounds_label(&app.thresholds, &app.config.pricing.currency)
            ),
            Style::default().fg(MUTED),
        ));
    }
    let bar = Paragraph::new(vec![Line::from(type_spans), Line::from(price_spans)])
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(bar, chunks[0]);

    let mut list_area = chunks[1];
    if commerce {
        let highlight = Paragraph::new(vec![
            Line::from(Span::styled(
                t.t("properties.commerceHighlight.title"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t.t("properties.commerceHighlight.text"),
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(highlight, chunks[1]);
        list_area = chunks[2];
    }

    if results.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(t.t("properties.empty.title")),
            Line::raw(""),
            Line::from(Span::styled(
                format!("[r] {}", t.t("properties.empty.reset")),
                Style::default().fg(ACCENT),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(p.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(p.location.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(
                    format_price(p.price, &app.config.pricing.currency),
                    Style::default().fg(ACCENT),
                ),
                Span::raw("  "),
                Span::styled(t.t(p.property_type.label_key()), Style::default().fg(MUTED)),
            ]))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(app.list_index.min(results.len() - 1)));
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{} ({})",
            t.t("properties.hero.label"),
            results.len()
        )))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)).fg(ACCENT))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, list_area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.translator;
    let view = match app.router.selected_property_id() {
        Some(id) => DetailView::build(catalog::catalog(), id),
        None => DetailView::Missing {
            requested_id: String::new(),
        },
    };

    let record = match view.record() {
        Some(record) => record,
        None => {
            let missing = Paragraph::new(vec![
                Line::raw(""),
                Line::from(Span::styled(
                    t.t("propertyDetail.notFound.title"),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    t.t("propertyDetail.notFound.text"),
                    Style::default().fg(Color::Gray),
                )),
                Line::raw(""),
                Line::from(Span::styled(
                    format!("Esc  {}", t.t("propertyDetail.notFound.back")),
                    Style::default().fg(ACCENT),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(missing, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(4),
        ])
        .split(area);

    // Carousel: the active image path with its position, then the thumbnail
    // strip addressed by the digit keys.
    let position = app
        .carousel
        .as_ref()
        .map(CarouselState::position_label)
        .unwrap_or_default();
    let active_image = app
        .carousel
        .as_ref()
        .and_then(|car| record.images.get(car.active_index()))
        .map(String::as_str)
        .unwrap_or("");
    let mut thumbs = Vec::new();
    for i in 0..record.images.len() {
        let active = app.carousel.as_ref().map_or(false, |c| c.active_index() == i);
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        thumbs.push(Span::styled(format!("[{}] ", i + 1), style));
    }
    let carousel = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("⟨  {}  ⟩", active_image),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
        Line::from(thumbs).alignment(Alignment::Center),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{}  {}", record.title, position)),
    );
    frame.render_widget(carousel, chunks[0]);

    let mut metric_spans = vec![Span::styled(
        format!("{}  ", record.location),
        Style::default().fg(Color::Gray),
    )];
    if let Some(bedrooms) = record.bedrooms {
        metric_spans.push(Span::raw(format!(
            "{}: {}   ",
            t.t("propertyDetail.metrics.suites"),
            bedrooms
        )));
    }
    if let Some(bathrooms) = record.bathrooms {
        metric_spans.push(Span::raw(format!(
            "{}: {}   ",
            t.t("propertyDetail.metrics.baths"),
            bathrooms
        )));
    }
    metric_spans.push(Span::raw(format!(
        "{}: {}",
        t.t("propertyDetail.metrics.surface"),
        record.surface_m2
    )));
    frame.render_widget(Paragraph::new(Line::from(metric_spans)), chunks[1]);

    let mut body = Vec::new();
    for line in record.description.lines() {
        body.push(Line::raw(line.to_string()));
    }
    body.push(Line::raw(""));
    body.push(Line::from(Span::styled(
        t.t("propertyDetail.features"),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for feature in &record.features {
        body.push(Line::raw(format!("  • {}", feature)));
    }
    let description = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(t.t("propertyDetail.presentation")),
        )
        .wrap(Wrap { trim: true })
        .scroll((app.router.viewport().scroll, 0));
    frame.render_widget(description, chunks[2]);

    let actions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{}: ", t.t("propertyDetail.price")),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format_price(record.price, &app.config.pricing.currency),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "{}: {}",
                t.t("propertyDetail.whatsapp"),
                property_inquiry(record, t, &app.config)
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(
                "{}: {}  ({})",
                t.t("propertyDetail.call"),
                app.config.contact.phone_display,
                app.config.contact.tel_link
            ),
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(actions, chunks[3]);
}

fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.translator;
    let mut lines = vec![
        Line::from(Span::styled(t.t("about.hero.kicker"), Style::default().fg(ACCENT))),
        Line::from(Span::styled(
            t.t("about.hero.title"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(t.t("about.hero.subtitle"), Style::default().fg(Color::Gray))),
        Line::raw(""),
        Line::from(Span::styled(
            t.t("about.positioning.title"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(t.t("about.positioning.p1")),
        Line::raw(t.t("about.positioning.p2")),
        Line::raw(t.t("about.positioning.p3")),
        Line::raw(""),
        Line::from(vec![
            Span::styled("10+ ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(t.t("about.stats.years"), Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled("300+ ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(t.t("about.stats.assets"), Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled("500+ ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(t.t("about.stats.clients"), Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled(t.t("about.stats.zoneValue"), Style::default().fg(Color::Gray)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            t.t("about.values.title"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for value in ["v1", "v2", "v3", "v4"] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", t.t(&format!("about.values.{}.title", value))),
                Style::default().fg(ACCENT),
            ),
            Span::raw(t.t(&format!("about.values.{}.text", value))),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}  ", t.t("about.cta.title")),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(t.t("about.cta.text"), Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(Span::styled(
        t.t("about.cta.signature"),
        Style::default().fg(MUTED),
    )));

    let about = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(view_title(View::About, t)))
        .wrap(Wrap { trim: true })
        .scroll((app.router.viewport().scroll, 0));
    frame.render_widget(about, area);
}

fn render_contact(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.translator;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let settling = app.form.is_settling(Instant::now());

    let marker = |focused: bool| {
        if focused {
            Span::styled("▸ ", Style::default().fg(ACCENT))
        } else {
            Span::raw("  ")
        }
    };
    let field_line = |focus: FormFocus, label: String, value: &str| -> Line<'static> {
        let focused = app.focus == focus;
        let mut spans = vec![
            marker(focused),
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::raw(value.to_string()),
        ];
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
        }
        Line::from(spans)
    };

    let mut selector = vec![marker(app.focus == FormFocus::Project)];
    for project in ProjectType::ALL {
        let style = if project == app.form.project_type() {
            Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        selector.push(Span::styled(format!(" {} ", t.t(project.label_key())), style));
    }

    let submit_label = if settling {
        t.t("contact.form.sending")
    } else {
        t.t("contact.form.button")
    };
    let submit = Line::from(vec![
        marker(app.focus == FormFocus::Submit),
        Span::styled(
            format!("[ {} ]", submit_label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut lines = vec![
        Line::from(selector),
        Line::raw(""),
        field_line(FormFocus::Name, t.t("contact.form.name"), &app.form.name),
        field_line(FormFocus::Email, t.t("contact.form.email"), &app.form.email),
        field_line(FormFocus::Phone, t.t("contact.form.phone"), &app.form.phone),
        field_line(
            FormFocus::Field1,
            t.t(app.form.project_type().field1_key()),
            &app.form.field1,
        ),
        field_line(
            FormFocus::Field2,
            t.t(app.form.project_type().field2_key()),
            &app.form.field2,
        ),
        field_line(FormFocus::Details, t.t("contact.form.message"), &app.form.details),
        Line::raw(""),
        submit,
    ];
    if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    if !settling {
        if let Some(link) = &app.handoff_link {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("→ {}", link),
                Style::default().fg(Color::Green),
            )));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        t.t("contact.form.security"),
        Style::default().fg(MUTED),
    )));

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(t.t("contact.hero.tagline")),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(form, chunks[0]);

    let sidebar = Paragraph::new(vec![
        Line::raw(app.config.contact.phone_display.clone()),
        Line::raw(app.config.contact.email.clone()),
        Line::raw(app.config.agency.region.clone()),
        Line::raw(""),
        Line::from(Span::styled(
            t.t("footer.availability.title"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(format!(
            "{}  {}",
            t.t("footer.availability.week"),
            t.t("footer.availability.weekHours")
        )),
        Line::raw(format!(
            "{}  {}",
            t.t("footer.availability.saturday"),
            t.t("footer.availability.saturdayHours")
        )),
        Line::raw(format!(
            "{}  {}",
            t.t("footer.availability.sunday"),
            t.t("footer.availability.closed")
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(t.t("contact.sidebar.direct")),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(sidebar, chunks[1]);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn app() -> App {
        App::new(Config::default(), Lang::Fr)
    }

    #[test]
    fn test_menu_digits_switch_views() {
        let mut app = app();
        assert_eq!(app.router.current_view(), View::Home);

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.router.current_view(), View::Properties);
        assert!(app.results.is_some());

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.router.current_view(), View::About);
        assert!(app.results.is_none());

        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.router.current_view(), View::Home);
    }

    #[test]
    fn test_home_enter_opens_featured_detail() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.router.current_view(), View::PropertyDetail);
        let expected = &catalog::featured()[1].id;
        assert_eq!(app.router.selected_property_id(), Some(expected.as_str()));
    }

    #[test]
    fn test_list_enter_opens_detail_and_targets_carousel() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.router.current_view(), View::PropertyDetail);
        let first = &catalog::catalog()[0];
        assert_eq!(app.router.selected_property_id(), Some(first.id.as_str()));
        let car = app.carousel.as_ref().unwrap();
        assert_eq!(car.property_id(), first.id);
        assert_eq!(car.active_index(), 0);
    }

    #[test]
    fn test_carousel_keys_wrap_in_detail() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Enter));

        let count = app.carousel.as_ref().unwrap().image_count();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.carousel.as_ref().unwrap().active_index(), count - 1);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.carousel.as_ref().unwrap().active_index(), 0);
    }

    #[test]
    fn test_filter_key_narrows_results() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        let all = app.results.as_ref().unwrap().len();

        // First cycle step selects villas only.
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.criteria.type_filter, TypeFilter::Only(PropertyType::Villa));
        let villas = app.results.as_ref().unwrap().len();
        assert!(villas < all);
        assert_eq!(app.list_index, 0);
    }

    #[test]
    fn test_empty_listing_resets_with_r() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        // Cycle to the land tab; the catalog has no land.
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Char('f')));
        }
        assert!(app.results.as_ref().unwrap().is_empty());

        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.criteria.is_default());
        assert_eq!(app.results.as_ref().unwrap().len(), catalog::catalog().len());
    }

    #[test]
    fn test_leaving_listing_discards_filters() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Char('f')));
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));

        assert!(app.criteria.is_default());
    }

    #[test]
    fn test_esc_in_detail_returns_to_listing() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.router.current_view(), View::Properties);
        // The selection survives the bare navigation.
        assert!(app.router.selected_property_id().is_some());
    }

    #[test]
    fn test_language_key_cycles_interface() {
        let mut app = app();
        assert_eq!(app.translator.active(), Lang::Fr);
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.translator.active(), Lang::En);
    }

    #[test]
    fn test_quit_is_disabled_while_a_text_field_is_focused() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, FormFocus::Name);

        // 'q' types into the field instead of quitting.
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.form.name, "q");

        // Esc unfocuses, then 'q' quits.
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.focus, FormFocus::Project);
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_project_arrows_switch_and_clear_specific_fields() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));
        app.form.field1 = "150 000 000 FCFA".to_string();

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.project_type(), ProjectType::Sell);
        assert_eq!(app.form.field1, "");
    }

    #[test]
    fn test_submit_requires_filled_form() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));
        for _ in 0..7 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.focus, FormFocus::Submit);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.notice.is_some());
        assert!(app.handoff_link.is_none());
    }

    #[test]
    fn test_submit_builds_handoff_link() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));
        app.form.name = "Awa Ndiaye".to_string();
        app.form.email = "awa@example.sn".to_string();
        app.form.phone = "+221 70 000 00 00".to_string();
        app.form.field1 = "150 000 000 FCFA".to_string();
        app.form.field2 = "Almadies".to_string();
        app.form.details = "Villa avec piscine".to_string();

        app.focus = FormFocus::Submit;
        app.handle_key(key(KeyCode::Enter));

        assert!(app.notice.is_none());
        let link = app.handoff_link.as_ref().unwrap();
        assert!(link.starts_with("https://wa.me/221774308344?text="));
        assert!(app.form.is_settling(Instant::now()));
    }
}
