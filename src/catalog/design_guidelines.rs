use super::DescribedCategory;

pub(super) const CATEGORIES: &[DescribedCategory] = &[
    (
        "color",
        "Color Palette",
        &[
            ("Primary color", "Main brand color used for primary actions"),
            ("Secondary color", "Supporting color for accents"),
            ("Neutral scale", "Greys for text, borders and backgrounds"),
            ("Status colors", "Success, warning, error and info colors"),
            ("Dark mode", "Palette adjustments for dark theme"),
        ],
    ),
    (
        "typography",
        "Typography",
        &[
            ("Heading font", "Typeface and weights for headings"),
            ("Body font", "Typeface and size for body text"),
            ("Type scale", "Size steps from captions to display text"),
            ("Line height", "Vertical rhythm for readable paragraphs"),
        ],
    ),
    (
        "layout",
        "Spacing & Layout",
        &[
            ("Spacing scale", "Base unit and multiples for margins and padding"),
            ("Grid", "Column count, gutters and max content width"),
            ("Density", "Compact or comfortable layouts"),
        ],
    ),
    (
        "components",
        "Component Style",
        &[
            ("Buttons", "Shapes, sizes and variants of buttons"),
            ("Forms", "Input, select and checkbox styling"),
            ("Cards", "Elevation, radius and padding of cards"),
            ("Tables", "Row height, striping and header style"),
        ],
    ),
    (
        "accessibility",
        "Accessibility",
        &[
            ("Contrast", "Minimum contrast ratios for text and controls"),
            ("Focus states", "Visible focus indicators for keyboard users"),
            ("Motion", "Reduced-motion alternatives"),
        ],
    ),
    (
        "responsive",
        "Responsive Design",
        &[
            ("Breakpoints", "Viewport widths where layouts change"),
            ("Mobile navigation", "Navigation pattern on small screens"),
            ("Touch targets", "Minimum size for tappable elements"),
        ],
    ),
    (
        "iconography",
        "Iconography",
        &[
            ("Icon set", "Icon library and style (outline, filled)"),
            ("Icon sizes", "Standard icon dimensions"),
        ],
    ),
];
