use super::constants::*;

/// How the per-tick rotation angle is derived from the orientation ratio.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RotationMode {
    /// Rotate by `ratio * DEGREES_PER_RATIO` every tick with no bound.
    #[default]
    Incremental,
    /// Same as `Incremental`, but each axis angle is limited to
    /// `±max_degrees` per tick.
    Clamped { max_degrees: f32 },
}

impl RotationMode {
    /// Per-tick angle in degrees for one axis.
    #[inline]
    pub fn step_degrees(self, ratio: f32, degrees_per_ratio: f32) -> f32 {
        let raw = ratio * degrees_per_ratio;
        match self {
            RotationMode::Incremental => raw,
            RotationMode::Clamped { max_degrees } => {
                let limit = max_degrees.abs();
                raw.clamp(-limit, limit)
            }
        }
    }
}

/// Tuning for a mounted sphere.
#[derive(Clone, Debug)]
pub struct SphereConfig {
    pub container_id: String,
    pub labels: Vec<String>,
    pub spread: f32,
    pub degrees_per_ratio: f32,
    pub tick_interval_ms: i32,
    pub min_opacity: f32,
    pub label_y_offset: f32,
    pub rotation_mode: RotationMode,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            labels: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            spread: SPHERE_SPREAD,
            degrees_per_ratio: DEGREES_PER_RATIO,
            tick_interval_ms: TICK_INTERVAL_MS,
            min_opacity: MIN_LABEL_OPACITY,
            label_y_offset: LABEL_Y_OFFSET_PX,
            rotation_mode: RotationMode::Incremental,
        }
    }
}

impl SphereConfig {
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        self.rotation_mode = mode;
        self
    }
}

/// Parse a comma separated label list such as the `data-skills` attribute.
///
/// Blank entries are dropped; `None` means the list held nothing usable.
pub fn parse_label_list(raw: &str) -> Option<Vec<String>> {
    let labels: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!labels.is_empty()).then_some(labels)
}
