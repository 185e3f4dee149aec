use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Image handle produced by the picker. `base64` carries the encoded
/// payload when it could be read; without it the image can be shown but
/// never sent to the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PickedImage {
    pub uri: String,
    pub base64: Option<String>,
}

/// Which store slot was written. Receivers pull the current value through
/// the accessors; the notification only names the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    PaletteImage,
    Palette,
    BaseImage,
    RecolorResult,
}

#[derive(Default)]
struct Slots {
    palette_image: Option<PickedImage>,
    palette: Vec<String>,
    base_image: Option<PickedImage>,
    recolor_result: Option<String>,
}

/// Shared application store, read and written by the palette screen and
/// its siblings. Each slot is independently settable; there is no
/// transactional grouping. Every write is announced on a broadcast
/// channel so other screens can refresh.
pub struct AyaStore {
    slots: Mutex<Slots>,
    changes: broadcast::Sender<StoreChange>,
}

impl AyaStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(32);
        Self {
            slots: Mutex::new(Slots::default()),
            changes,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }

    pub fn palette_image(&self) -> Option<PickedImage> {
        self.slots.lock().palette_image.clone()
    }

    pub fn set_palette_image(&self, image: Option<PickedImage>) {
        self.slots.lock().palette_image = image;
        self.notify(StoreChange::PaletteImage);
    }

    pub fn palette(&self) -> Vec<String> {
        self.slots.lock().palette.clone()
    }

    /// Replaces the palette with whatever the backend returned, in server
    /// order. An empty sequence is a valid value.
    pub fn set_palette(&self, palette: Vec<String>) {
        self.slots.lock().palette = palette;
        self.notify(StoreChange::Palette);
    }

    pub fn base_image(&self) -> Option<PickedImage> {
        self.slots.lock().base_image.clone()
    }

    pub fn set_base_image(&self, image: Option<PickedImage>) {
        self.slots.lock().base_image = image;
        self.notify(StoreChange::BaseImage);
    }

    pub fn recolor_result(&self) -> Option<String> {
        self.slots.lock().recolor_result.clone()
    }

    pub fn set_recolor_result(&self, result: Option<String>) {
        self.slots.lock().recolor_result = result;
        self.notify(StoreChange::RecolorResult);
    }

    fn notify(&self, change: StoreChange) {
        // No subscribers is fine; screens come and go.
        let _ = self.changes.send(change);
    }
}

impl Default for AyaStore {
    fn default() -> Self {
        Self::new()
    }
}
