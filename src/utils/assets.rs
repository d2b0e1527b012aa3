use crate::model::error::Error;
use crate::model::error::misc::MiscError;
use eframe::egui::IconData;
use rust_embed::RustEmbed;

const APP_ICON: &str = "icon.png";

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

impl Assets {
    pub fn load_app_icon() -> Result<IconData, Error> {
        let icon_bytes = Assets::get(APP_ICON).ok_or_else(|| MiscError::AssetFileNotFound {
            name: APP_ICON.to_string(),
        })?;

        let image = image::load_from_memory(&icon_bytes.data)
            .map_err(|err| MiscError::DeserializeError {
                name: APP_ICON.to_string(),
                reason: err.to_string(),
            })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        let rgba = image.into_raw();

        Ok(IconData {
            rgba,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_decodes() {
        let icon = Assets::load_app_icon().unwrap();
        assert_eq!(icon.rgba.len(), (icon.width * icon.height * 4) as usize);
    }
}
