//! Host-driven drive loop for a [`ParticleField`].
//!
//! The host owns the clock: it calls [`Animator::tick`] once per display
//! refresh and [`Animator::resize`] when the viewport changes. The animator
//! keeps exactly one outstanding frame request and one resize listener while
//! mounted, and gives both back when it is dropped.

use crate::{config::FieldConfig, field::ParticleField, surface::Surface, types::SurfaceSize};
use rand::Rng;

/// Handle for a pending next-frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Handle for a viewport-resize listener registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// The environment's frame scheduler and resize notifier.
#[cfg_attr(test, mockall::automock)]
pub trait FrameHost {
    /// Asks for one more frame callback.
    fn request_frame(&mut self) -> FrameToken;

    /// Withdraws a frame request that has not fired yet.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Starts delivering viewport resize notifications.
    fn watch_resize(&mut self) -> ListenerToken;

    /// Stops the notifications registered under `token`.
    fn unwatch_resize(&mut self, token: ListenerToken);
}

/// Mount/tick/unmount lifecycle around a [`ParticleField`].
///
/// If the surface was unavailable at mount time the animator is inert: it
/// holds no field, no host registrations, and every call is a no-op.
pub struct Animator<H: FrameHost, R: Rng> {
    host: H,
    rng: R,
    field: Option<ParticleField>,
    pending_frame: Option<FrameToken>,
    resize_listener: Option<ListenerToken>,
}

impl<H: FrameHost, R: Rng> Animator<H, R> {
    /// Builds the field and starts the frame loop.
    ///
    /// ### Parameters
    /// - `host` - Frame scheduler; receives one resize registration and the
    ///   first frame request.
    /// - `cfg` - Field configuration; `cfg.particle_count()` particles are
    ///   created.
    /// - `surface` - Size of the drawing surface, or `None` when no surface
    ///   could be obtained.
    /// - `rng` - Random source used for placement and recolouring.
    pub fn mount(mut host: H, cfg: FieldConfig, surface: Option<SurfaceSize>, mut rng: R) -> Self {
        let Some(size) = surface else {
            tracing::warn!("drawing surface unavailable; particle field stays idle");
            return Self {
                host,
                rng,
                field: None,
                pending_frame: None,
                resize_listener: None,
            };
        };

        let count = cfg.particle_count();
        let field = ParticleField::new(size, count, cfg, &mut rng);
        let resize_listener = Some(host.watch_resize());
        let pending_frame = Some(host.request_frame());
        tracing::info!(count, "particle field mounted");

        Self {
            host,
            rng,
            field: Some(field),
            pending_frame,
            resize_listener,
        }
    }

    /// Runs one frame: advance, render, then schedule the next frame.
    pub fn tick(&mut self, time: f64, surface: &mut impl Surface) {
        let Some(field) = self.field.as_mut() else {
            return;
        };

        // The request that triggered this tick has fired.
        self.pending_frame = None;

        field.advance_frame(time, &mut self.rng);
        field.render(surface);

        self.pending_frame = Some(self.host.request_frame());
    }

    /// Regenerates the field at `size`. Safe to call repeatedly.
    pub fn resize(&mut self, size: SurfaceSize) {
        if let Some(field) = self.field.as_mut() {
            field.resize(size, &mut self.rng);
        }
    }

    /// Tears the animator down. Equivalent to dropping it.
    pub fn unmount(self) {}

    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn release(&mut self) {
        if let Some(token) = self.pending_frame.take() {
            self.host.cancel_frame(token);
        }
        if let Some(token) = self.resize_listener.take() {
            self.host.unwatch_resize(token);
        }
        if self.field.take().is_some() {
            tracing::info!("particle field unmounted");
        }
    }
}

impl<H: FrameHost, R: Rng> Drop for Animator<H, R> {
    fn drop(&mut self) {
        self.release();
    }
}
