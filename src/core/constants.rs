// Shared layout and animation tuning constants for the label sphere.

// Geometry
pub const SPHERE_SPREAD: f32 = 0.75; // fraction of the container radius used by points
pub const DEGREES_PER_RATIO: f32 = 10.0; // rotation per tick for a ratio of 1.0

// Animation
pub const TICK_INTERVAL_MS: i32 = 100;
pub const LABEL_TRANSITION_SEC: f32 = 0.1; // matches the tick so moves read as continuous

// Rendering
pub const MIN_LABEL_OPACITY: f32 = 0.1;
pub const LABEL_Y_OFFSET_PX: f32 = -20.0; // lifts text so its baseline sits on the anchor

// Initial drift before the first pointer move, drawn from [0, INITIAL_RATIO_MAX)
pub const INITIAL_RATIO_MAX: f32 = 0.5;

// DOM
pub const DEFAULT_CONTAINER_ID: &str = "sphere";
pub const LABEL_CLASS: &str = "sphere-item";
pub const SKILLS_DATA_ATTRIBUTE: &str = "data-skills";

// Page title applied when the sphere is mounted on its own route
pub const SKILLS_ROUTE: &str = "/skills";
pub const SKILLS_PAGE_TITLE: &str = "Josh Pollard | ⚙️";

pub const DEFAULT_SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "SCSS",
    "Python",
    "JavaScript",
    "TypeScript",
    "Dart",
    "C++",
    "ReactJS",
    "Angular",
    "VueJS",
    "Flutter",
    "npm",
    "git",
    "pip",
    "Github",
    "Firebase",
    "Google Cloud",
];
