//! Edge detection over two consecutive device snapshots.
//!
//! A [`DeviceTracker`] keeps the snapshot fetched on the previous tick and the
//! one fetched on the current tick. Continuous queries ([`is_active`],
//! [`is_inactive`]) look at the current snapshot only; edge queries
//! ([`just_activated`], [`just_deactivated`]) compare both.
//!
//! Use continuous queries for things that repeat while held (movement) and
//! edge queries for things that happen once per press (jumping, menu confirm).
//!
//! [`is_active`]: DeviceTracker::is_active
//! [`is_inactive`]: DeviceTracker::is_inactive
//! [`just_activated`]: DeviceTracker::just_activated
//! [`just_deactivated`]: DeviceTracker::just_deactivated

/// Raw state of one device at one instant.
///
/// `Default` must be the "nothing active" snapshot.
pub trait ControlState: Clone + Default {
    /// Identifier of a key, button or axis direction on this device.
    type Control: Copy;

    fn is_active(&self, control: Self::Control) -> bool;
}

/// Previous and current snapshot of a single device (or gamepad slot).
#[derive(Debug, Clone, Default)]
pub struct DeviceTracker<S: ControlState> {
    previous: S,
    current: S,
}

impl<S: ControlState> DeviceTracker<S> {
    /// Start tracking with `initial` as the current snapshot. The previous
    /// snapshot is the empty one, so controls held at startup report a
    /// rising edge on the first query.
    pub fn new(initial: S) -> Self {
        Self {
            previous: S::default(),
            current: initial,
        }
    }

    /// Shift current into previous and store the freshly fetched snapshot.
    ///
    /// Call exactly once per tick before querying.
    pub fn update(&mut self, next: S) {
        self.previous = std::mem::replace(&mut self.current, next);
    }

    pub fn previous(&self) -> &S {
        &self.previous
    }

    pub fn current(&self) -> &S {
        &self.current
    }

    /// Whether `control` is active this tick.
    #[inline]
    pub fn is_active(&self, control: S::Control) -> bool {
        self.current.is_active(control)
    }

    /// Whether `control` is inactive this tick.
    #[inline]
    pub fn is_inactive(&self, control: S::Control) -> bool {
        !self.current.is_active(control)
    }

    /// Active now, inactive on the previous tick.
    #[inline]
    pub fn just_activated(&self, control: S::Control) -> bool {
        self.current.is_active(control) && !self.previous.is_active(control)
    }

    /// Inactive now, active on the previous tick.
    #[inline]
    pub fn just_deactivated(&self, control: S::Control) -> bool {
        !self.current.is_active(control) && self.previous.is_active(control)
    }
}
