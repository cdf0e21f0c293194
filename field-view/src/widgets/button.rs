use egui::{Color32, Stroke};

/// Visual style of a [`button`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn fill(self) -> Color32 {
        match self {
            ButtonVariant::Primary => Color32::from_rgb(99, 102, 241),
            ButtonVariant::Secondary => Color32::from_rgb(51, 65, 85),
            ButtonVariant::Outline | ButtonVariant::Ghost => Color32::TRANSPARENT,
        }
    }

    pub fn text_color(self) -> Color32 {
        match self {
            ButtonVariant::Primary | ButtonVariant::Secondary => Color32::WHITE,
            ButtonVariant::Outline => Color32::from_rgb(165, 180, 252),
            ButtonVariant::Ghost => Color32::from_rgb(203, 213, 225),
        }
    }

    pub fn stroke(self) -> Stroke {
        match self {
            ButtonVariant::Outline => Stroke::new(1.0, Color32::from_rgb(129, 140, 248)),
            _ => Stroke::NONE,
        }
    }
}

/// Button text: the icon, if any, followed by the label.
pub fn caption(label: &str, icon: Option<&str>) -> String {
    match (icon, label.is_empty()) {
        (Some(icon), true) => icon.to_owned(),
        (Some(icon), false) => format!("{icon} {label}"),
        (None, _) => label.to_owned(),
    }
}

/// Draws a styled button and reports whether it was clicked.
pub fn button(ui: &mut egui::Ui, label: &str, icon: Option<&str>, variant: ButtonVariant) -> bool {
    let text = egui::RichText::new(caption(label, icon)).color(variant.text_color());
    ui.add(
        egui::Button::new(text)
            .fill(variant.fill())
            .stroke(variant.stroke()),
    )
    .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_joins_icon_and_label() {
        assert_eq!(caption("Start", Some("▶")), "▶ Start");
        assert_eq!(caption("Start", None), "Start");
        assert_eq!(caption("", Some("＋")), "＋");
    }

    #[test]
    fn only_outline_has_a_border() {
        assert_ne!(ButtonVariant::Outline.stroke(), Stroke::NONE);
        for v in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
        ] {
            assert_eq!(v.stroke(), Stroke::NONE);
        }
    }

    #[test]
    fn filled_variants_are_opaque() {
        assert_eq!(ButtonVariant::Primary.fill().a(), 255);
        assert_eq!(ButtonVariant::Ghost.fill(), Color32::TRANSPARENT);
    }
}
