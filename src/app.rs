//! App shell: owns the stores, the event bus, the navigator and the three
//! views, and runs one update pass per frame.
//!
//! Frame order: one-shot window placement, hotkey poll, event dispatch,
//! then render whichever view the navigator selects. Hidden views keep
//! their in-memory state; they are simply not rendered.

use eframe::egui::{self, Context};

use crate::config::UiConfig;
use crate::events::{EventBus, EventPublisher};
use crate::handlers::{dispatch, Navigator, View};
use crate::input;
use crate::storage::{PrefsStore, TaskStore};
use crate::ui::{theme, HelpView, SettingsView, TodoView};

pub struct GlasspadApp {
    config: UiConfig,
    tasks: TaskStore,
    prefs: PrefsStore,
    bus: EventBus,
    publisher: EventPublisher,
    navigator: Navigator,
    todo: TodoView,
    help: HelpView,
    settings: SettingsView,
    /// One-shot: the window has been parked bottom-right.
    placed: bool,
}

impl GlasspadApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: UiConfig,
        tasks: TaskStore,
        prefs: PrefsStore,
    ) -> Self {
        theme::apply(&cc.egui_ctx, &config);

        let bus = EventBus::new();
        let publisher = bus.publisher();

        Self {
            todo: TodoView::new(&config),
            help: HelpView::new(),
            settings: SettingsView::new(&config),
            config,
            tasks,
            prefs,
            bus,
            publisher,
            navigator: Navigator::new(),
            placed: false,
        }
    }

    /// Park the window in the bottom-right corner of the screen.
    ///
    /// Screen geometry is only queryable once the event loop is running, so
    /// this retries each frame until the viewport reports a monitor size.
    fn place_bottom_right(&mut self, ctx: &Context) {
        if let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) {
            if monitor.x > 0.0 && monitor.y > 0.0 {
                let pos = egui::pos2(
                    monitor.x - self.config.window_width - self.config.screen_margin,
                    monitor.y - self.config.window_height - self.config.screen_margin,
                );
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
                self.placed = true;
            }
        }
        if !self.placed {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for GlasspadApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.placed {
            self.place_bottom_right(ctx);
        }

        input::poll(ctx, &self.publisher);
        dispatch(&self.bus, &mut self.navigator);

        if self.navigator.current().is_terminal() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(theme::panel_frame())
            .show(ctx, |ui| match self.navigator.current() {
                View::Todo => self.todo.show(ctx, ui, &mut self.tasks),
                View::Help => self.help.show(ui),
                View::Settings => self.settings.show(ui, &mut self.prefs),
                View::Exited => {}
            });
    }
}
