//! Watch face lifecycle
//!
//! The host calls into the engine whenever something happens on the device
//! and asks it to redraw on its own schedule. The engine decides whether a
//! new frame is due and reads the clock once for every frame it draws.

use chrono::{FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use embedded_graphics::geometry::Size;

use super::{Canvas, DrawError, InterruptionFilter, Properties, WatchFace};
use crate::system::time::ClockSource;

pub struct FaceEngine<F, K> {
    face: F,
    clock: K,
    visible: bool,
    invalidated: bool,
    /// Time zone updates reach the clock only while registered
    zone_receiver: bool,
    /// Time zone the host currently reports
    zone: FixedOffset,
    /// Hour and minute of the last frame
    shown: Option<(u32, u32)>,
}

impl<F, K> FaceEngine<F, K>
where
    F: WatchFace,
    K: ClockSource,
{
    pub fn new(face: F, clock: K) -> Self {
        Self {
            face,
            clock,
            visible: false,
            invalidated: true,
            zone_receiver: false,
            zone: Utc.fix(),
            shown: None,
        }
    }

    pub fn face(&self) -> &F {
        &self.face
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut K {
        &mut self.clock
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// Request a new frame
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub fn on_time_tick(&mut self) {
        self.invalidate();
    }

    pub fn on_visibility_changed(&mut self, visible: bool) {
        self.visible = visible;

        if visible {
            self.register_receiver();
            // The zone may have changed while we were hidden
            self.clock.set_time_zone(self.zone);
            self.invalidate();
        } else {
            self.unregister_receiver();
        }
    }

    pub fn on_time_zone_changed(&mut self, zone: FixedOffset) {
        self.zone = zone;
        if self.zone_receiver {
            self.clock.set_time_zone(zone);
            self.invalidate();
        }
    }

    pub fn on_surface_changed(&mut self, size: Size) {
        self.face.on_surface_changed(size);
        self.invalidate();
    }

    pub fn on_properties_changed(&mut self, properties: Properties) {
        self.face.on_properties_changed(properties);
    }

    pub fn on_ambient_mode_changed(&mut self, ambient: bool) {
        info!("Ambient mode: {}", ambient);
        if self.face.on_ambient_mode_changed(ambient) {
            self.invalidate();
        }
    }

    pub fn on_interruption_filter_changed(&mut self, filter: InterruptionFilter) {
        if self.face.on_interruption_filter_changed(filter) {
            info!("Mute: {}", filter.is_mute());
            self.invalidate();
        }
    }

    /// Invalidate when the time on screen is outdated.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if self.shown != Some((now.hour(), now.minute())) {
            self.on_time_tick();
        }
    }

    /// Draw a frame if visible and invalidated. Returns whether a frame was drawn.
    pub fn redraw<C>(&mut self, canvas: &mut C) -> Result<bool, DrawError<C::Error>>
    where
        C: Canvas,
    {
        if !self.visible || !self.invalidated {
            return Ok(false);
        }

        let now: NaiveDateTime = self.clock.now();
        self.face.draw(canvas, &now)?;

        debug!("Drew {}:{}", now.hour(), now.minute());
        self.shown = Some((now.hour(), now.minute()));
        self.invalidated = false;
        Ok(true)
    }

    fn register_receiver(&mut self) {
        if self.zone_receiver {
            return;
        }
        self.zone_receiver = true;
    }

    fn unregister_receiver(&mut self) {
        if !self.zone_receiver {
            return;
        }
        self.zone_receiver = false;
    }
}
