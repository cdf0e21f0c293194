use egui::Color32;

/// Colour scheme for a [`ProgressBar`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressStyle {
    #[default]
    Default,
    Success,
    Warning,
}

impl ProgressStyle {
    pub fn color(self) -> Color32 {
        match self {
            ProgressStyle::Default => Color32::from_rgb(99, 102, 241),
            ProgressStyle::Success => Color32::from_rgb(34, 197, 94),
            ProgressStyle::Warning => Color32::from_rgb(234, 179, 8),
        }
    }
}

const TRACK: Color32 = Color32::from_rgb(30, 41, 59);
const HEIGHT: f32 = 10.0;

/// `value / max` as a percentage clamped to `[0, 100]`.
///
/// A non-positive `max` or a NaN input yields `0`.
pub fn percentage(value: f32, max: f32) -> f32 {
    if max.is_nan() || max <= 0.0 {
        return 0.0;
    }
    let pct = value / max * 100.0;
    if pct.is_nan() { 0.0 } else { pct.clamp(0.0, 100.0) }
}

/// Horizontal bar filled in proportion to `value / max`.
#[derive(Clone, Copy, Debug)]
pub struct ProgressBar {
    pub value: f32,
    pub max: f32,
    pub style: ProgressStyle,
    pub show_label: bool,
}

impl ProgressBar {
    pub fn new(value: f32, max: f32) -> Self {
        Self {
            value,
            max,
            style: ProgressStyle::default(),
            show_label: false,
        }
    }

    pub fn style(mut self, style: ProgressStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    pub fn percentage(&self) -> f32 {
        percentage(self.value, self.max)
    }

    /// Width of the filled part inside a track `track_width` wide.
    pub fn fill_width(&self, track_width: f32) -> f32 {
        track_width * self.percentage() / 100.0
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let desired = egui::vec2(ui.available_width(), HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let rounding = egui::CornerRadius::same(5);

        let painter = ui.painter();
        painter.rect_filled(rect, rounding, TRACK);

        let mut filled = rect;
        filled.set_width(self.fill_width(rect.width()));
        painter.rect_filled(filled, rounding, self.style.color());

        if self.show_label {
            ui.label(format!("{:.0}%", self.percentage()));
        }
        response
    }
}
