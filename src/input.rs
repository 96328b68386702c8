use web_sys as web;

// ---------------- Event position helpers ----------------

/// Pointer position in viewport (client) coordinates.
#[inline]
pub fn pointer_client_pos(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

/// First touch point in page coordinates, if any touch is active.
#[inline]
pub fn first_touch_page_pos(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    ev.touches()
        .get(0)
        .map(|t| (t.page_x() as f32, t.page_y() as f32))
}
