//! Style catalog and resolver.
//!
//! A [`StyleSelection`] names a color theme, layout, font, and entrance
//! animation as free strings (share tokens may carry anything). The resolver
//! maps each field to concrete presentation parameters from a fixed catalog,
//! substituting the default entry for any unknown or unset value — resolution
//! is total and never fails.

use serde::{Deserialize, Serialize};

/// The user's style choices, as collected from the form or a share token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSelection {
    pub color_theme: String,
    pub layout_style: String,
    pub font_style: String,
    pub animation_style: String,
}

/// A fully resolved set of presentation parameters. Every field points at a
/// catalog entry; none is ever absent.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStyle {
    pub color: &'static ColorTheme,
    pub layout: &'static Layout,
    pub font: &'static FontChoice,
    pub animation: &'static Animation,
}

/// Accent colors for one theme: hex values for inline CSS, plus the gradient
/// stop pair applied to the header banner.
#[derive(Debug)]
pub struct ColorTheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

/// Container spacing and card surface classes for one layout.
#[derive(Debug)]
pub struct Layout {
    pub container: &'static str,
    pub card: &'static str,
}

/// A CSS font stack plus its Google Fonts import URL.
#[derive(Debug)]
pub struct FontChoice {
    pub stack: &'static str,
    pub import: &'static str,
}

/// An entrance animation: keyframes identifier, the `@keyframes` rule itself,
/// and the duration applied to animated sections. A zero duration means no
/// animation is emitted.
#[derive(Debug)]
pub struct Animation {
    pub name: &'static str,
    pub keyframes: &'static str,
    pub duration_ms: u32,
}

// -----------------------------------------------------------------------
// Catalog entries
// -----------------------------------------------------------------------

static BLUE: ColorTheme = ColorTheme {
    primary: "#2563eb",
    secondary: "#1e40af",
    gradient_from: "from-blue-600",
    gradient_to: "to-indigo-700",
};

static GREEN: ColorTheme = ColorTheme {
    primary: "#16a34a",
    secondary: "#166534",
    gradient_from: "from-green-600",
    gradient_to: "to-emerald-700",
};

static PURPLE: ColorTheme = ColorTheme {
    primary: "#9333ea",
    secondary: "#6b21a8",
    gradient_from: "from-purple-600",
    gradient_to: "to-violet-700",
};

static ORANGE: ColorTheme = ColorTheme {
    primary: "#ea580c",
    secondary: "#9a3412",
    gradient_from: "from-orange-500",
    gradient_to: "to-red-600",
};

static TEAL: ColorTheme = ColorTheme {
    primary: "#0d9488",
    secondary: "#115e59",
    gradient_from: "from-teal-500",
    gradient_to: "to-cyan-700",
};

static MODERN: Layout = Layout {
    container: "max-w-4xl mx-auto p-4 md:p-8",
    card: "bg-white rounded-lg shadow-md border border-gray-200 p-6",
};

static CLASSIC: Layout = Layout {
    container: "max-w-3xl mx-auto p-6 md:p-10",
    card: "bg-white rounded border border-gray-300 shadow-sm p-6",
};

static MINIMAL: Layout = Layout {
    container: "max-w-2xl mx-auto p-4 md:p-6",
    card: "bg-white p-6",
};

static INTER: FontChoice = FontChoice {
    stack: "'Inter', -apple-system, BlinkMacSystemFont, sans-serif",
    import: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
};

static POPPINS: FontChoice = FontChoice {
    stack: "'Poppins', sans-serif",
    import: "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap",
};

static ROBOTO: FontChoice = FontChoice {
    stack: "'Roboto', sans-serif",
    import: "https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap",
};

static PLAYFAIR: FontChoice = FontChoice {
    stack: "'Playfair Display', Georgia, serif",
    import: "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700&display=swap",
};

static FADE: Animation = Animation {
    name: "folio-fade-in",
    keyframes: "@keyframes folio-fade-in { from { opacity: 0; } to { opacity: 1; } }",
    duration_ms: 600,
};

static SLIDE: Animation = Animation {
    name: "folio-slide-up",
    keyframes: "@keyframes folio-slide-up { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: none; } }",
    duration_ms: 500,
};

static ZOOM: Animation = Animation {
    name: "folio-zoom-in",
    keyframes: "@keyframes folio-zoom-in { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: none; } }",
    duration_ms: 450,
};

static NONE: Animation = Animation {
    name: "none",
    keyframes: "",
    duration_ms: 0,
};

// -----------------------------------------------------------------------
// Lookups
// -----------------------------------------------------------------------

/// Resolve a color theme name. Lookup is trimmed and case-insensitive.
pub fn color_theme(name: &str) -> Option<&'static ColorTheme> {
    match name.trim().to_lowercase().as_str() {
        "blue" => Some(&BLUE),
        "green" => Some(&GREEN),
        "purple" => Some(&PURPLE),
        "orange" => Some(&ORANGE),
        "teal" => Some(&TEAL),
        _ => None,
    }
}

/// Resolve a layout style name.
pub fn layout(name: &str) -> Option<&'static Layout> {
    match name.trim().to_lowercase().as_str() {
        "modern" => Some(&MODERN),
        "classic" => Some(&CLASSIC),
        "minimal" => Some(&MINIMAL),
        _ => None,
    }
}

/// Resolve a font style name.
pub fn font(name: &str) -> Option<&'static FontChoice> {
    match name.trim().to_lowercase().as_str() {
        "inter" | "sans" => Some(&INTER),
        "poppins" => Some(&POPPINS),
        "roboto" => Some(&ROBOTO),
        "playfair" | "playfair-display" | "serif" => Some(&PLAYFAIR),
        _ => None,
    }
}

/// Resolve an animation style name.
pub fn animation(name: &str) -> Option<&'static Animation> {
    match name.trim().to_lowercase().as_str() {
        "fade" | "fade-in" => Some(&FADE),
        "slide" | "slide-up" => Some(&SLIDE),
        "zoom" | "zoom-in" => Some(&ZOOM),
        "none" => Some(&NONE),
        _ => None,
    }
}

/// Resolve a full selection against the catalog.
///
/// Unknown or unset values degrade to the fixed defaults
/// (`blue` / `modern` / `Inter` / `fade`) rather than erroring.
pub fn resolve(selection: &StyleSelection) -> ResolvedStyle {
    ResolvedStyle {
        color: color_theme(&selection.color_theme).unwrap_or(&BLUE),
        layout: layout(&selection.layout_style).unwrap_or(&MODERN),
        font: font(&selection.font_style).unwrap_or(&INTER),
        animation: animation(&selection.animation_style).unwrap_or(&FADE),
    }
}

/// Canonical color theme names, in catalog order.
pub fn available_color_themes() -> &'static [&'static str] {
    &["blue", "green", "purple", "orange", "teal"]
}

/// Canonical layout style names.
pub fn available_layouts() -> &'static [&'static str] {
    &["modern", "classic", "minimal"]
}

/// Canonical font style names.
pub fn available_fonts() -> &'static [&'static str] {
    &["inter", "poppins", "roboto", "playfair"]
}

/// Canonical animation style names.
pub fn available_animations() -> &'static [&'static str] {
    &["fade", "slide", "zoom", "none"]
}

/// Parse a hex color (#RGB, #RRGGBB) and return a readable text color for
/// content placed on that background: "#fff" for dark accents, "#1a1a2e"
/// for light ones (WCAG relative luminance, threshold 0.25).
pub fn accent_text_color(hex: &str) -> &'static str {
    let hex = hex.trim().trim_start_matches('#');
    let (r, g, b) = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).unwrap_or(0) * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).unwrap_or(0) * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).unwrap_or(0) * 17;
            (r, g, b)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
            (r, g, b)
        }
        _ => return "#fff",
    };
    fn linearize(c: u8) -> f64 {
        let s = c as f64 / 255.0;
        if s <= 0.04045 { s / 12.92 } else { ((s + 0.055) / 1.055).powf(2.4) }
    }
    let lum = 0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b);
    if lum > 0.25 { "#1a1a2e" } else { "#fff" }
}
