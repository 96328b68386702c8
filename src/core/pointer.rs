/// Normalized pointer offset from the container center.
///
/// Used as the per-tick rotation increment: `x` drives yaw, `y` drives pitch.
/// Values are roughly in `[-1, 1]` while the pointer is over the container
/// but are never clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationRatio {
    pub x: f32,
    pub y: f32,
}

/// Container bounds in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Half the smaller side.
    #[inline]
    pub fn sphere_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }
}

/// Map a pointer position to an orientation ratio.
///
/// Returns `None` while the sphere has no usable radius.
#[inline]
pub fn orientation_ratio(
    pointer_x: f32,
    pointer_y: f32,
    rect: &ContainerRect,
    radius: f32,
) -> Option<OrientationRatio> {
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let (cx, cy) = rect.center();
    Some(OrientationRatio {
        x: (pointer_x - cx) / radius,
        y: (pointer_y - cy) / radius,
    })
}
