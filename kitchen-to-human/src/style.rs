use owo_colors::{AnsiColors, Style};

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct KitchenStyles {
    pub title: Style,
    pub meta_key: Style,
    pub vegetable: Style,
    pub other_vegetable: Style,
    pub quantity: Style,
    pub equipment: Style,
    pub section_name: Style,
}

impl KitchenStyles {
    pub fn default_styles() -> Self {
        Self {
            title: Style::new()
                .color(AnsiColors::White)
                .on_color(AnsiColors::Magenta)
                .bold(),
            meta_key: Style::new().color(AnsiColors::BrightGreen).bold(),
            vegetable: Style::new().color(AnsiColors::Green),
            other_vegetable: Style::new().color(AnsiColors::Green).italic(),
            quantity: Style::new().color(AnsiColors::BrightYellow),
            equipment: Style::new().color(AnsiColors::Yellow),
            section_name: Style::new().bold().underline(),
        }
    }

    /// Same layout, no colors
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            meta_key: Style::new(),
            vegetable: Style::new(),
            other_vegetable: Style::new(),
            quantity: Style::new(),
            equipment: Style::new(),
            section_name: Style::new(),
        }
    }
}

static STYLE: std::sync::OnceLock<KitchenStyles> = std::sync::OnceLock::new();

/// Set custom styles
///
/// Returns true if the styles were set.
///
/// This can only be called once and before any formatting is done, otherwise
/// it will return false.
pub fn set_styles(styles: KitchenStyles) -> bool {
    STYLE.set(styles).is_ok()
}

#[inline]
pub(crate) fn styles() -> &'static KitchenStyles {
    STYLE.get_or_init(KitchenStyles::default_styles)
}
