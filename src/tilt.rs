//! Pointer-driven tilt effect for the active item.

use crate::TiltConfig;

/// On-screen rectangle of an item, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ItemRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get the center point as (x, y).
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Rotation around the X and Y axes, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

/// Visual transform of the active item.
///
/// Lift and scale are constant; only the rotation follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    pub lift_px: f64,
    pub scale: f64,
    pub rotation: Option<Rotation>,
}

impl ItemTransform {
    /// Resting transform of an active, untilted item.
    pub fn resting(config: &TiltConfig) -> Self {
        Self {
            lift_px: config.lift_px,
            scale: config.scale,
            rotation: None,
        }
    }

    /// Format as a CSS `transform` value.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use media_carousel::{ItemTransform, Rotation, TiltConfig};
    ///
    /// let mut transform = ItemTransform::resting(&TiltConfig::default());
    /// assert_eq!(transform.css(), "translateY(-12px) scale(1.02)");
    ///
    /// transform.rotation = Some(Rotation { x_deg: -1.5, y_deg: 3.0 });
    /// assert_eq!(
    ///     transform.css(),
    ///     "translateY(-12px) scale(1.02) rotateX(-1.5deg) rotateY(3deg)"
    /// );
    /// ```
    pub fn css(&self) -> String {
        let base = format!(
            "translateY({}px) scale({})",
            css_number(-self.lift_px),
            css_number(self.scale)
        );
        match self.rotation {
            Some(r) => format!(
                "{} rotateX({}deg) rotateY({}deg)",
                base,
                css_number(r.x_deg),
                css_number(r.y_deg)
            ),
            None => base,
        }
    }
}

/// Round to two decimals for CSS output, without a negative zero.
#[inline]
fn css_number(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Map a pointer position inside `rect` to a rotation.
///
/// Horizontal offset from the center drives the Y axis; vertical offset
/// drives the X axis with the sign inverted so the top edge tilts toward
/// the viewer. Each axis is clamped to `max_angle_deg`.
pub fn rotation_for(rect: &ItemRect, x: f64, y: f64, max_angle_deg: f64) -> Rotation {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Rotation::default();
    }
    let (cx, cy) = rect.center();
    let nx = ((x - cx) / (rect.width / 2.0)).clamp(-1.0, 1.0);
    let ny = ((y - cy) / (rect.height / 2.0)).clamp(-1.0, 1.0);
    Rotation {
        x_deg: -ny * max_angle_deg,
        y_deg: nx * max_angle_deg,
    }
}

/// Tilt handler bound to the active carousel item.
///
/// Events for any item other than the bound one are ignored, so
/// listeners left on a previously active item have no visual effect.
#[derive(Clone, Debug)]
pub struct TiltEffect {
    config: TiltConfig,
    /// Index of the item the handler is bound to
    bound: Option<usize>,
    hovering: bool,
    last: Option<Rotation>,
}

impl TiltEffect {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            bound: None,
            hovering: false,
            last: None,
        }
    }

    /// Bind to the active item.
    ///
    /// Hover state is discarded only when the active item changes; binding
    /// the item that is already bound keeps an in-progress tilt.
    pub fn bind(&mut self, index: usize) {
        if self.bound == Some(index) {
            return;
        }
        log::trace!("tilt bound to item {}", index);
        self.bound = Some(index);
        self.hovering = false;
        self.last = None;
    }

    #[inline]
    pub fn bound(&self) -> Option<usize> {
        self.bound
    }

    /// Whether the pointer is over the bound item.
    #[inline]
    pub fn is_tilting(&self) -> bool {
        self.hovering
    }

    /// Last computed rotation while hovering.
    #[inline]
    pub fn rotation(&self) -> Option<Rotation> {
        self.last
    }

    /// Pointer entered `index`. Returns true if it is the bound item.
    pub fn pointer_enter(&mut self, index: usize) -> bool {
        if self.bound != Some(index) {
            return false;
        }
        self.hovering = true;
        true
    }

    /// Pointer moved over `index` at viewport position (x, y).
    ///
    /// Returns the new transform, or `None` if the event is ignored.
    pub fn pointer_move(&mut self, index: usize, rect: &ItemRect, x: f64, y: f64) -> Option<ItemTransform> {
        if self.bound != Some(index) || !self.hovering {
            return None;
        }
        let rotation = rotation_for(rect, x, y, self.config.max_angle_deg);
        self.last = Some(rotation);
        Some(ItemTransform {
            rotation: Some(rotation),
            ..ItemTransform::resting(&self.config)
        })
    }

    /// Pointer left `index`. Returns the resting transform if it is the bound item.
    pub fn pointer_leave(&mut self, index: usize) -> Option<ItemTransform> {
        if self.bound != Some(index) {
            return None;
        }
        self.hovering = false;
        self.last = None;
        Some(ItemTransform::resting(&self.config))
    }

    /// Current transform of the bound item.
    pub fn transform(&self) -> ItemTransform {
        ItemTransform {
            rotation: self.last,
            ..ItemTransform::resting(&self.config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> ItemRect {
        ItemRect::new(100.0, 50.0, 200.0, 300.0)
    }

    #[test]
    fn center_has_no_rotation() {
        let r = rotation_for(&rect(), 200.0, 200.0, 3.0);
        assert_eq!(r, Rotation { x_deg: 0.0, y_deg: 0.0 });
    }

    #[test]
    fn edges_reach_max() {
        let r = rotation_for(&rect(), 300.0, 200.0, 3.0);
        assert_eq!(r.y_deg, 3.0);
        let r = rotation_for(&rect(), 100.0, 200.0, 3.0);
        assert_eq!(r.y_deg, -3.0);
        // top edge tilts toward the viewer
        let r = rotation_for(&rect(), 200.0, 50.0, 3.0);
        assert_eq!(r.x_deg, 3.0);
        let r = rotation_for(&rect(), 200.0, 350.0, 3.0);
        assert_eq!(r.x_deg, -3.0);
    }

    #[test]
    fn outside_is_clamped() {
        let r = rotation_for(&rect(), 1000.0, -1000.0, 3.0);
        assert_eq!(r, Rotation { x_deg: 3.0, y_deg: 3.0 });
    }

    #[test]
    fn zero_area_rect() {
        let r = rotation_for(&ItemRect::new(0.0, 0.0, 0.0, 10.0), 5.0, 5.0, 3.0);
        assert_eq!(r, Rotation::default());
    }

    #[test]
    fn move_requires_hover() {
        let mut tilt = TiltEffect::new(TiltConfig::default());
        tilt.bind(2);
        assert_eq!(tilt.pointer_move(2, &rect(), 300.0, 200.0), None);

        assert!(tilt.pointer_enter(2));
        let t = tilt.pointer_move(2, &rect(), 300.0, 200.0).unwrap();
        assert_eq!(t.rotation.map(|r| r.y_deg), Some(3.0));
        assert!(tilt.is_tilting());
    }

    #[test]
    fn leave_resets_to_resting() {
        let mut tilt = TiltEffect::new(TiltConfig::default());
        tilt.bind(0);
        tilt.pointer_enter(0);
        tilt.pointer_move(0, &rect(), 120.0, 60.0);
        let t = tilt.pointer_leave(0).unwrap();
        assert_eq!(t.rotation, None);
        assert_eq!(t.css(), "translateY(-12px) scale(1.02)");
        assert!(!tilt.is_tilting());
        assert_eq!(tilt.rotation(), None);
    }

    #[test]
    fn rebinding_same_item_keeps_hover() {
        let mut tilt = TiltEffect::new(TiltConfig::default());
        tilt.bind(0);
        tilt.pointer_enter(0);
        tilt.pointer_move(0, &rect(), 300.0, 200.0);
        tilt.bind(0);
        assert!(tilt.is_tilting());
        assert_eq!(tilt.rotation().map(|r| r.y_deg), Some(3.0));
    }

    #[test]
    fn css_rounds_to_two_decimals() {
        let mut tilt = TiltEffect::new(TiltConfig::default());
        tilt.bind(0);
        tilt.pointer_enter(0);
        // 20px right of center on a 200px wide item: 0.2 * 3deg
        let t = tilt.pointer_move(0, &rect(), 220.0, 200.0).unwrap();
        assert_eq!(t.css(), "translateY(-12px) scale(1.02) rotateX(0deg) rotateY(0.6deg)");

        let t = ItemTransform {
            rotation: Some(Rotation { x_deg: -0.001, y_deg: 1.23456 }),
            ..ItemTransform::resting(&TiltConfig::default())
        };
        assert_eq!(t.css(), "translateY(-12px) scale(1.02) rotateX(0deg) rotateY(1.23deg)");
    }

    #[test]
    fn stale_item_ignored() {
        let mut tilt = TiltEffect::new(TiltConfig::default());
        tilt.bind(0);
        tilt.pointer_enter(0);
        tilt.bind(1);
        assert!(!tilt.is_tilting());
        assert!(!tilt.pointer_enter(0));
        assert_eq!(tilt.pointer_move(0, &rect(), 300.0, 200.0), None);
        assert_eq!(tilt.pointer_leave(0), None);
    }
}
