use eframe::egui;
use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use std::sync::Arc;

// Tried after egui's bundled fonts, for glyphs they lack.
const FALLBACK_FAMILIES: [(&str, &[&str]); 2] = [
    ("cjk", &["Microsoft YaHei", "PingFang SC", "Noto Sans CJK SC", "DFKai-SB", "BiauKai"]),
    (
        "system_emoji",
        &["Segoe UI Emoji", "Segoe UI Symbol", "Apple Color Emoji", "Noto Color Emoji"],
    ),
];

fn load_family(source: &SystemSource, names: &[&str]) -> Option<egui::FontData> {
    let families: Vec<FamilyName> = names
        .iter()
        .map(|name| FamilyName::Title(name.to_string()))
        .collect();
    let handle = source
        .select_best_match(&families, &Properties::default())
        .ok()?;
    let font = handle.load().ok()?;
    let data = font.copy_font_data()?;
    Some(egui::FontData::from_owned(data.to_vec()))
}

/// Puts the preferred system font in front of egui's defaults and appends
/// fallbacks for paths with non-latin names.
pub fn setup_system_fonts(ctx: &egui::Context, preferred: Option<&str>) {
    let mut fonts = egui::FontDefinitions::default();
    let system_source = SystemSource::new();

    if let Some(preferred) = preferred {
        if let Some(font_data) = load_family(&system_source, &[preferred]) {
            fonts
                .font_data
                .insert("preferred".to_owned(), Arc::new(font_data));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                if let Some(names) = fonts.families.get_mut(&family) {
                    names.insert(0, "preferred".to_owned());
                }
            }
        }
    }

    for (key, names) in FALLBACK_FAMILIES {
        if let Some(font_data) = load_family(&system_source, names) {
            fonts.font_data.insert(key.to_owned(), Arc::new(font_data));
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                proportional.push(key.to_owned());
            }
        }
    }

    ctx.set_fonts(fonts);
}
