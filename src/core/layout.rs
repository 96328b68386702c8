use super::config::SphereConfig;
use super::constants::INITIAL_RATIO_MAX;
use super::error::LayoutError;
use super::labels::shuffle_with;
use super::pointer::{orientation_ratio, ContainerRect, OrientationRatio};
use super::sphere::{fibonacci_sphere, rotate_points, rotation_matrix, LabelPlacement};
use glam::Vec3;
use rand::prelude::*;

/// All mutable state of one label sphere.
///
/// Platform free: the web layer feeds it container sizes, pointer positions
/// and timer ticks, and reads back placements to draw.
pub struct SphereLayout {
    pub config: SphereConfig,
    labels: Vec<String>,
    points: Vec<Vec3>,
    radius: f32,
    ratio: OrientationRatio,
    ready: bool,
    rng: StdRng,
}

impl SphereLayout {
    /// Build a layout with labels shuffled and an initial drift chosen from `seed`.
    pub fn new(config: SphereConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let labels = shuffle_with(&config.labels, &mut rng);
        let ratio = OrientationRatio {
            x: rng.gen::<f32>() * INITIAL_RATIO_MAX,
            y: rng.gen::<f32>() * INITIAL_RATIO_MAX,
        };
        Self {
            config,
            labels,
            points: Vec::new(),
            radius: 0.0,
            ratio,
            ready: false,
            rng,
        }
    }

    /// Swap in a new label list, shuffled with the layout's own RNG.
    ///
    /// Points are regenerated for the new count when the sphere is already
    /// laid out.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = shuffle_with(&labels, &mut self.rng);
        self.config.labels = labels;
        if self.ready {
            self.points = fibonacci_sphere(self.labels.len(), self.radius, self.config.spread);
        }
    }

    /// Whether the render layer still has to build label elements, given how
    /// many it currently holds.
    pub fn needs_label_elements(&self, existing: usize) -> bool {
        self.ready && existing != self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn ratio(&self) -> OrientationRatio {
        self.ratio
    }

    pub fn set_ratio(&mut self, ratio: OrientationRatio) {
        self.ratio = ratio;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// React to new container dimensions.
    ///
    /// Returns `true` when the radius changed and points were regenerated.
    /// A non-positive radius leaves everything untouched.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let radius = width.min(height) / 2.0;
        if radius.is_nan() || radius <= 0.0 {
            log::debug!("[sphere] container has no size yet ({}x{})", width, height);
            return false;
        }
        if self.ready && radius == self.radius {
            return false;
        }
        self.radius = radius;
        self.points = fibonacci_sphere(self.labels.len(), radius, self.config.spread);
        self.ready = true;
        log::debug!(
            "[sphere] radius={:.1} points={} first={:?}",
            radius,
            self.points.len(),
            self.points.first()
        );
        true
    }

    /// Resize from a container lookup that may have failed.
    ///
    /// A failed lookup is logged and leaves every field untouched, so the next
    /// resize simply tries again.
    pub fn resize_from(&mut self, size: Result<(f32, f32), LayoutError>) -> bool {
        match size {
            Ok((w, h)) => self.resize(w, h),
            Err(e) => {
                log::warn!("[resize] {}", e);
                false
            }
        }
    }

    pub fn resize_to_rect(&mut self, rect: &ContainerRect) -> bool {
        self.resize(rect.width, rect.height)
    }

    /// Update the orientation ratio from a pointer position in the same
    /// coordinate space as `rect`. Ignored until the sphere has a radius.
    pub fn pointer_moved(&mut self, x: f32, y: f32, rect: &ContainerRect) -> bool {
        match orientation_ratio(x, y, rect, self.radius) {
            Some(r) => {
                self.ratio = r;
                true
            }
            None => false,
        }
    }

    /// Advance the animation by one timer tick.
    pub fn tick(&mut self) {
        if !self.ready {
            return;
        }
        let mode = self.config.rotation_mode;
        let per_ratio = self.config.degrees_per_ratio;
        let pitch = mode.step_degrees(-self.ratio.y, per_ratio);
        let yaw = mode.step_degrees(self.ratio.x, per_ratio);
        let rotation = rotation_matrix(pitch, yaw, 0.0);
        // Snap back onto the sphere so f32 error cannot accumulate across ticks
        let limit = self.radius * self.config.spread;
        self.points = rotate_points(&self.points, rotation)
            .into_iter()
            .map(|p| p.normalize_or_zero() * limit)
            .collect();
    }

    /// Render-ready output, one entry per label in label order.
    ///
    /// Empty until the first successful resize.
    pub fn placements(&self) -> Vec<LabelPlacement> {
        if !self.ready {
            return Vec::new();
        }
        self.points
            .iter()
            .map(|p| {
                LabelPlacement::from_point(
                    *p,
                    self.radius,
                    self.config.min_opacity,
                    self.config.label_y_offset,
                )
            })
            .collect()
    }
}
