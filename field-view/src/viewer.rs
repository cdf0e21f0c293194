//! Debate-practice front page drawn over an animated particle background.
//!
//! This module defines [`Viewer`], which mounts the particle field as the
//! bottom layer of the central panel and arranges the buttons, progress bar,
//! floating action menu and glossary window above it.

use crate::{
    backdrop::{EguiHost, PainterSurface},
    widgets::{
        action_menu::{ActionMenu, MenuAction},
        button::{ButtonVariant, button},
        glossary::GlossaryModal,
        progress::{ProgressBar, ProgressStyle},
    },
};
use eframe::App;
use field_core::{animator::Animator, config::FieldConfig, types::SurfaceSize};
use rand::rngs::ThreadRng;

const ROUNDS_PER_SESSION: u32 = 4;

/// Root application state.
///
/// The particle animator is mounted on the first frame with whatever size
/// the central panel has at that point. If that size is empty the animator
/// stays inert for the viewer's lifetime and no background is drawn; the
/// mount is not retried.
///
/// ### Fields
/// - `ctx` - egui context handed to the animator's frame host.
/// - `cfg` - Particle field configuration.
/// - `animator` - Background animator; `None` before the first frame.
/// - `last_size` - Panel size seen on the previous frame, for resize detection.
/// - `last_tick_time` - egui time of the last tick, so extra passes within
///   one frame repaint without advancing the field again.
/// - `menu` / `glossary` - Overlay widgets.
/// - `rounds_done` / `rounds_total` - Practice progress shown in the top bar.
pub struct Viewer {
    ctx: egui::Context,
    cfg: FieldConfig,
    animator: Option<Animator<EguiHost, ThreadRng>>,
    last_size: Option<SurfaceSize>,
    last_tick_time: Option<f64>,

    menu: ActionMenu,
    glossary: GlossaryModal,

    rounds_done: u32,
    rounds_total: u32,
}

fn surface_size(rect: egui::Rect) -> Option<SurfaceSize> {
    (rect.width() > 0.0 && rect.height() > 0.0)
        .then(|| SurfaceSize::new(rect.width(), rect.height()))
}

impl Viewer {
    pub fn new(ctx: egui::Context, cfg: FieldConfig) -> Self {
        Self {
            ctx,
            cfg,
            animator: None,
            last_size: None,
            last_tick_time: None,
            menu: ActionMenu::default(),
            glossary: GlossaryModal::default(),
            rounds_done: 0,
            rounds_total: ROUNDS_PER_SESSION,
        }
    }

    fn next_round(&mut self) {
        self.rounds_done = (self.rounds_done + 1).min(self.rounds_total);
    }

    fn reset_progress(&mut self) {
        self.rounds_done = 0;
    }

    fn progress_style(&self) -> ProgressStyle {
        if self.rounds_done >= self.rounds_total {
            ProgressStyle::Success
        } else if self.rounds_done * 2 < self.rounds_total {
            ProgressStyle::Warning
        } else {
            ProgressStyle::Default
        }
    }

    fn handle_action(&mut self, action: MenuAction) {
        tracing::debug!(?action, "menu action");
        match action {
            MenuAction::OpenGlossary => self.glossary.open(),
            MenuAction::NextRound => self.next_round(),
            MenuAction::ResetProgress => self.reset_progress(),
        }
    }

    /// Mounts on first use, forwards size changes, and ticks when a frame
    /// is pending. A repeated pass at the same egui time only repaints.
    fn draw_background(&mut self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let size = surface_size(rect);

        let animator = self.animator.get_or_insert_with(|| {
            Animator::mount(
                EguiHost::new(self.ctx.clone()),
                self.cfg.clone(),
                size,
                rand::rng(),
            )
        });

        if let Some(size) = size {
            if self.last_size.is_some_and(|last| last != size)
                && animator.host().is_watching_resize()
            {
                tracing::debug!(width = size.width, height = size.height, "background resized");
                animator.resize(size);
            }
            self.last_size = Some(size);
        }

        if !animator.host().has_pending_frame() {
            return;
        }

        let time = ui.input(|i| i.time);
        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface::new(&painter, rect);

        if self.last_tick_time.is_none_or(|last| time > last) {
            animator.tick(time, &mut surface);
            self.last_tick_time = Some(time);
        } else if let Some(field) = animator.field() {
            field.render(&mut surface);
        }
    }

    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Debate Practice");
                ui.separator();

                if button(ui, "Next round", Some("▶"), ButtonVariant::Primary) {
                    self.next_round();
                }
                if button(ui, "Glossary", Some("📖"), ButtonVariant::Outline) {
                    self.glossary.open();
                }
                if button(ui, "Reset", None, ButtonVariant::Ghost) {
                    self.reset_progress();
                }

                ui.separator();
                ui.label(format!("Round {} / {}", self.rounds_done, self.rounds_total));
            });

            ProgressBar::new(self.rounds_done as f32, self.rounds_total as f32)
                .style(self.progress_style())
                .show_label(true)
                .show(ui);
            ui.add_space(4.0);
        });
    }

    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_background(ui);

            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.heading("Ready for the next motion?");
                ui.label("Open the glossary or start a round from the menu.");
            });
        });
    }

    /// Builds every panel and overlay for one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.ui_top_panel(ctx);
        self.ui_central_panel(ctx);

        if let Some(action) = self.menu.show(ctx) {
            self.handle_action(action);
        }
        self.glossary.show(ctx);
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
