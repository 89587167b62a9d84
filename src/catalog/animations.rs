use super::SimpleCategory;

pub(super) const CATEGORIES: &[SimpleCategory] = &[
    (
        "entrance",
        "Entrance Effects",
        &["Fade in", "Slide in", "Zoom in", "Bounce in"],
    ),
    (
        "exit",
        "Exit Effects",
        &["Fade out", "Slide out", "Zoom out", "Collapse"],
    ),
    (
        "hover-effects",
        "Hover Effects",
        &["Lift", "Glow", "Scale up", "Color shift"],
    ),
    (
        "page-transitions",
        "Page Transitions",
        &["Cross-fade", "Slide between pages", "Shared element transition"],
    ),
    (
        "loading",
        "Loading Animations",
        &["Skeleton shimmer", "Spinner", "Progress fill", "Pulsing dots"],
    ),
    (
        "scroll",
        "Scroll Animations",
        &["Reveal on scroll", "Parallax", "Sticky progress indicator"],
    ),
    (
        "micro-interactions",
        "Micro-interactions",
        &["Button press", "Toggle switch", "Checkbox tick", "Like burst"],
    ),
];
