use super::{TextKey, TextProvider};
use crate::shared::DrawLocale;

impl TextProvider for DrawLocale {
    fn text(&self, key: TextKey) -> &str {
        match key {
            TextKey::Start => &self.start,
            TextKey::Continue => &self.cont,
            TextKey::End => &self.end,
            TextKey::Error => &self.error,
        }
    }
}
