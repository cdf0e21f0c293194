use super::button::{ButtonVariant, button};

/// Something the floating menu can ask the caller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    OpenGlossary,
    NextRound,
    ResetProgress,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [
        MenuAction::OpenGlossary,
        MenuAction::NextRound,
        MenuAction::ResetProgress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::OpenGlossary => "Glossary",
            MenuAction::NextRound => "Next round",
            MenuAction::ResetProgress => "Reset progress",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MenuAction::OpenGlossary => "📖",
            MenuAction::NextRound => "▶",
            MenuAction::ResetProgress => "⟲",
        }
    }
}

/// Floating action button anchored to the bottom-right corner.
///
/// The only state is whether the action list is expanded. Choosing an
/// action collapses the list and hands the action back to the caller.
#[derive(Debug, Default)]
pub struct ActionMenu {
    open: bool,
}

impl ActionMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn choose(&mut self, action: MenuAction) -> MenuAction {
        self.open = false;
        action
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<MenuAction> {
        let mut chosen = None;

        egui::Area::new("action_menu".into())
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .movable(false)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                    let icon = if self.is_open() { "✕" } else { "＋" };
                    if button(ui, "", Some(icon), ButtonVariant::Primary) {
                        self.toggle();
                    }

                    if self.is_open() {
                        for action in MenuAction::ALL {
                            let (label, icon) = (action.label(), Some(action.icon()));
                            if button(ui, label, icon, ButtonVariant::Secondary) {
                                chosen = Some(action);
                            }
                        }
                    }
                });
            });

        chosen.map(|action| self.choose(action))
    }
}
