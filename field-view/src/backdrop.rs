//! egui implementations of the particle field's host and drawing surface.

use field_core::{
    animator::{FrameHost, FrameToken, ListenerToken},
    color::Rgb,
    surface::{Glow, Surface},
};
use glam::Vec2;

/// Fill colour used when the surface is cleared.
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 12, 28);

/// Converts a palette colour plus opacity into an egui colour.
pub fn to_color32(c: Rgb, opacity: f32) -> egui::Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, alpha)
}

/// Draws onto an [`egui::Painter`], with surface `(0, 0)` at `rect.min`.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, egui::CornerRadius::ZERO, BACKGROUND);
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Rgb,
        opacity: f32,
        glow: Option<Glow>,
    ) {
        let c = self.to_screen(center);

        // egui has no blur, so the halo is two translucent discs.
        if let Some(glow) = glow {
            self.painter
                .circle_filled(c, glow.radius, to_color32(color, glow.opacity * 0.5));
            self.painter.circle_filled(
                c,
                (glow.radius + radius) * 0.5,
                to_color32(color, glow.opacity),
            );
        }

        self.painter
            .circle_filled(c, radius, to_color32(color, opacity));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, opacity: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(1.0, to_color32(color, opacity)),
        );
    }
}

/// [`FrameHost`] backed by an egui context.
///
/// egui repaints cannot be withdrawn once requested, so the host tracks the
/// outstanding request itself; the viewer only ticks while one is pending.
/// Resize notifications are delivered by the viewer polling the panel size
/// while a listener is registered.
pub struct EguiHost {
    ctx: egui::Context,
    next_token: u64,
    pending: Option<FrameToken>,
    listener: Option<ListenerToken>,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            next_token: 0,
            pending: None,
            listener: None,
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_watching_resize(&self) -> bool {
        self.listener.is_some()
    }

    fn bump(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }
}

impl FrameHost for EguiHost {
    fn request_frame(&mut self) -> FrameToken {
        self.ctx.request_repaint();
        let token = FrameToken(self.bump());
        self.pending = Some(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn watch_resize(&mut self) -> ListenerToken {
        let token = ListenerToken(self.bump());
        self.listener = Some(token);
        token
    }

    fn unwatch_resize(&mut self, token: ListenerToken) {
        if self.listener == Some(token) {
            self.listener = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_core::color;

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(to_color32(color::BLUE, 1.0).a(), 255);
        assert_eq!(to_color32(color::BLUE, 0.0).a(), 0);
        assert_eq!(to_color32(color::BLUE, 7.0).a(), 255);
    }

    #[test]
    fn host_tracks_latest_frame_request() {
        let mut host = EguiHost::new(egui::Context::default());

        let first = host.request_frame();
        let second = host.request_frame();
        assert_ne!(first, second);

        // Cancelling a stale token leaves the newer request alone.
        host.cancel_frame(first);
        assert!(host.has_pending_frame());

        host.cancel_frame(second);
        assert!(!host.has_pending_frame());
    }

    #[test]
    fn host_resize_listener_round_trip() {
        let mut host = EguiHost::new(egui::Context::default());
        assert!(!host.is_watching_resize());

        let token = host.watch_resize();
        assert!(host.is_watching_resize());

        host.unwatch_resize(token);
        assert!(!host.is_watching_resize());
    }
}
