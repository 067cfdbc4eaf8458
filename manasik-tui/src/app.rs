//! Event loop: renders frames, translates input, applies messages.

use std::collections::HashSet;
use std::time::Duration;

use futures::StreamExt;
use minbar::event::{self, Event, Key};
use minbar::types::{Color, ColorContext, Edges, Size, Style};
use minbar::{hit_test, Element, HandlerRegistry, LayoutMap, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::AppError;
use crate::msg::Msg;
use crate::nav::{sidebar, Route};
use crate::settings::Settings;
use crate::theme::PortalTheme;
use crate::views::dashboard::DashboardView;
use crate::views::documents::DocumentsView;
use crate::views::finances::FinancesView;
use crate::views::fraud::FraudView;
use crate::views::journey::JourneyView;
use crate::views::packages::PackagesView;
use crate::views::resources::ResourcesView;
use crate::views::sentiment::SentimentView;

const TICK: Duration = Duration::from_millis(80);

pub struct App {
    settings: Settings,
    route: Route,
    tick: usize,
    status: String,
    should_quit: bool,
    fetched: HashSet<Route>,
    registry: HandlerRegistry,
    tx: UnboundedSender<Msg>,
    rx: UnboundedReceiver<Msg>,

    dashboard: DashboardView,
    journey: JourneyView,
    finances: FinancesView,
    fraud: FraudView,
    documents: DocumentsView,
    resources: ResourcesView,
    sentiment: SentimentView,
    packages: PackagesView,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let route = settings.last_route;
        Self {
            settings,
            route,
            tick: 0,
            status: "Ready".into(),
            should_quit: false,
            fetched: HashSet::new(),
            registry: HandlerRegistry::new(),
            tx,
            rx,
            dashboard: DashboardView::default(),
            journey: JourneyView::default(),
            finances: FinancesView::default(),
            fraud: FraudView::default(),
            documents: DocumentsView::default(),
            resources: ResourcesView::default(),
            sentiment: SentimentView::default(),
            packages: PackagesView::default(),
        }
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = Terminal::new()?;
        let mut events = crossterm::event::EventStream::new();
        let mut ticker = tokio::time::interval(TICK);

        self.ensure_loaded(self.route);

        loop {
            let theme = PortalTheme::new(self.settings.theme);
            let cx = ColorContext::new(&theme);
            let root = self.build_frame();
            terminal.render(&root, &cx)?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(raw)) => {
                        if let Some(event) = event::translate(raw) {
                            self.handle_event(event, &root, terminal.layout());
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => return Err(AppError::EventStreamClosed),
                },
                Some(msg) = self.rx.recv() => self.handle_msg(msg),
                _ = ticker.tick() => self.tick += 1,
            }

            if self.should_quit {
                break;
            }
        }

        if let Err(e) = self.settings.save() {
            log::warn!("could not persist settings: {e}");
        }
        Ok(())
    }

    fn build_frame(&self) -> Element {
        // Handlers are re-registered against the ids of this frame.
        self.registry.clear();

        let view = match self.route {
            Route::Dashboard => self.dashboard.element(&self.registry, &self.tx, self.tick),
            Route::Journey => self.journey.element(&self.registry, &self.tx, self.tick),
            Route::Finances => self.finances.element(&self.registry, &self.tx, self.tick),
            Route::Fraud => self.fraud.element(&self.registry, &self.tx, self.tick),
            Route::Documents => self.documents.element(&self.registry, &self.tx, self.tick),
            Route::Resources => self.resources.element(&self.registry, &self.tx, self.tick),
            Route::Sentiment => self.sentiment.element(&self.registry, &self.tx, self.tick),
            Route::Packages => self.packages.element(&self.registry, &self.tx, self.tick),
        };

        let main = Element::col()
            .id("main")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(view.height(Size::Fill))
            .child(self.status_bar());

        Element::row()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .child(sidebar(self.route, &self.registry, &self.tx))
            .child(main)
    }

    fn status_bar(&self) -> Element {
        Element::row()
            .id("status-bar")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .gap(2)
            .style(Style::new().background(Color::var("surface")))
            .child(
                Element::text(&self.status)
                    .width(Size::Fill)
                    .style(Style::new().foreground(Color::var("foreground"))),
            )
            .child(
                Element::text("1-8 views · r refresh · t theme · q quit")
                    .style(Style::new().foreground(Color::var("text.muted")).dim()),
            )
    }

    fn handle_event(&mut self, event: Event, root: &Element, layout: &LayoutMap) {
        match event {
            Event::Key { key, modifiers } => match key {
                Key::Char('q') | Key::Escape => self.should_quit = true,
                Key::Char('c') if modifiers.ctrl => self.should_quit = true,
                Key::Char('r') => self.refresh_current(),
                Key::Char('t') => {
                    self.settings.theme = self.settings.theme.toggled();
                }
                Key::Tab => self.navigate(self.route.next()),
                Key::BackTab => self.navigate(self.route.previous()),
                Key::Char(c) => {
                    if let Some(route) = Route::from_digit(c) {
                        self.navigate(route);
                    }
                }
                _ => {}
            },
            Event::Click { x, y, .. } => {
                if let Some(id) = hit_test(layout, root, x, y) {
                    self.registry.dispatch(&id, "on_activate");
                }
            }
            // The next render picks up the new size from the backend.
            Event::Resize { .. } => {}
        }
    }

    fn handle_msg(&mut self, msg: Msg) {
        match msg {
            Msg::Navigate(route) => self.navigate(route),
            Msg::Inspect(summary) => {
                log::info!("inspect: {summary}");
                self.status = summary;
            }
            Msg::AlertSelected(alert) => {
                self.status = alert.summary();
                self.fraud.selected = Some(alert);
            }
            Msg::PackageSelected(pkg) => {
                self.status = pkg.summary();
                self.packages.selected = Some(pkg);
            }
            Msg::DashboardLoaded(data) => {
                self.dashboard.data = Some(data);
                self.dashboard.loading = false;
            }
            Msg::PilgrimsLoaded(rows) => {
                self.journey.rows = rows;
                self.journey.loading = false;
            }
            Msg::TransactionsLoaded(rows) => {
                self.finances.rows = rows;
                self.finances.loading = false;
            }
            Msg::FraudAlertsLoaded(rows) => {
                self.fraud.rows = rows;
                self.fraud.loading = false;
            }
            Msg::DocumentsLoaded(rows) => {
                self.documents.rows = rows;
                self.documents.loading = false;
            }
            Msg::ResourcesLoaded(rows) => {
                self.resources.rows = rows;
                self.resources.loading = false;
            }
            Msg::SentimentLoaded(rows) => {
                self.sentiment.rows = rows;
                self.sentiment.loading = false;
            }
            Msg::PackagesLoaded(rows) => {
                self.packages.rows = rows;
                self.packages.loading = false;
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        if route != self.route {
            log::debug!("navigate to {route:?}");
            self.route = route;
            self.settings.last_route = route;
            self.status = route.title().into();
        }
        self.ensure_loaded(route);
    }

    /// First visit to a view kicks off its fetch; later visits reuse the
    /// rows already in memory.
    fn ensure_loaded(&mut self, route: Route) {
        if !self.fetched.insert(route) {
            return;
        }
        self.refresh(route);
    }

    fn refresh_current(&mut self) {
        let route = self.route;
        self.refresh(route);
        self.status = format!("Refreshing {}…", route.title());
    }

    fn refresh(&mut self, route: Route) {
        match route {
            Route::Dashboard => self.dashboard.fetch(&self.tx),
            Route::Journey => self.journey.fetch(&self.tx),
            Route::Finances => self.finances.fetch(&self.tx),
            Route::Fraud => self.fraud.fetch(&self.tx),
            Route::Documents => self.documents.fetch(&self.tx),
            Route::Resources => self.resources.fetch(&self.tx),
            Route::Sentiment => self.sentiment.fetch(&self.tx),
            Route::Packages => self.packages.fetch(&self.tx),
        }
    }
}
