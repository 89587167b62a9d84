use super::SimpleCategory;

pub(super) const CATEGORIES: &[SimpleCategory] = &[
    (
        "click-tap",
        "Click & Tap",
        &["Single click", "Double click", "Long press", "Right click menu"],
    ),
    (
        "hover",
        "Hover",
        &["Hover highlight", "Tooltip on hover", "Hover preview", "Hover reveal actions"],
    ),
    (
        "drag-drop",
        "Drag & Drop",
        &["Drag to reorder", "Drag to upload", "Drag between lists", "Resize by dragging"],
    ),
    (
        "gestures",
        "Swipe & Gestures",
        &["Swipe to delete", "Swipe to navigate", "Pinch to zoom", "Pull to refresh"],
    ),
    (
        "keyboard",
        "Keyboard Shortcuts",
        &["Enter to submit", "Escape to close", "Arrow key navigation", "Tab focus order"],
    ),
    (
        "form-input",
        "Form Input",
        &["Inline validation", "Auto-save", "Autocomplete", "Input masking"],
    ),
    (
        "navigation",
        "Navigation",
        &["Breadcrumbs", "Back navigation", "Deep linking", "Tabbed sections"],
    ),
    (
        "selection",
        "Selection",
        &["Multi-select", "Select all", "Range select with shift"],
    ),
    (
        "feedback",
        "Feedback",
        &["Toast notification", "Loading spinner", "Progress bar", "Confirmation dialog"],
    ),
    (
        "scrolling",
        "Scrolling",
        &["Infinite scroll", "Sticky header", "Scroll to top", "Lazy loading"],
    ),
    (
        "overlays",
        "Modals & Overlays",
        &["Open modal", "Close on backdrop click", "Slide-over panel", "Popover menu"],
    ),
    (
        "data-manipulation",
        "Data Manipulation",
        &["Inline edit", "Undo", "Bulk actions", "Sort columns", "Filter results"],
    ),
    (
        "media",
        "Media",
        &["Play/Pause", "Fullscreen toggle", "Image zoom", "Carousel"],
    ),
];
