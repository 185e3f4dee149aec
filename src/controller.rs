use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::events::{Clipboard, Route, ToastKind, ToastPosition, UiEvent};
use crate::picker::ImagePicker;
use crate::service::ServiceClient;
use crate::state::{Activity, WorkflowState};
use crate::store::AyaStore;

/// Orchestrates the palette screen: picker, palette extraction, recolor,
/// result navigation, all against the shared store.
///
/// One operation runs at a time; a trigger that arrives while another
/// operation is in flight is refused with a diagnostic.
pub struct PaletteWorkflow<P, C> {
    store: Arc<AyaStore>,
    service: ServiceClient,
    picker: P,
    clipboard: C,
    events: broadcast::Sender<UiEvent>,
    activity: Arc<Mutex<Activity>>,
    navigated: AtomicBool,
}

/// Resets the in-flight marker when dropped, so loading clears on every
/// exit path including cancellation.
struct ActivityGuard {
    slot: Arc<Mutex<Activity>>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        *self.slot.lock() = Activity::Idle;
    }
}

impl<P: ImagePicker, C: Clipboard> PaletteWorkflow<P, C> {
    pub fn new(store: Arc<AyaStore>, service: ServiceClient, picker: P, clipboard: C) -> Self {
        let (events, _) = broadcast::channel(32);
        Self {
            store,
            service,
            picker,
            clipboard,
            events,
            activity: Arc::new(Mutex::new(Activity::Idle)),
            navigated: AtomicBool::new(false),
        }
    }

    /// Receiver for the toasts, alerts and navigation requests this
    /// workflow emits.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    pub fn state(&self) -> WorkflowState {
        WorkflowState::derive(
            self.store.palette_image().is_some(),
            !self.store.palette().is_empty(),
            *self.activity.lock(),
            self.navigated.load(Ordering::SeqCst),
        )
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Run the picker and, when the pick carries a payload, extract its
    /// palette right away. Cancelling the dialog changes nothing.
    pub async fn select_palette_image(&self) {
        let Some(picked) = self.picker.pick_image() else {
            return;
        };
        self.navigated.store(false, Ordering::SeqCst);
        self.store.set_palette_image(Some(picked.clone()));
        match picked.base64.as_deref() {
            Some(base64) if !base64.is_empty() => self.extract_palette(base64).await,
            _ => eprintln!("No base64 found on selected image"),
        }
    }

    /// Forget the chosen palette image. The extracted palette stays on
    /// screen until a new extraction overwrites it.
    pub fn clear_palette_image(&self) {
        self.store.set_palette_image(None);
    }

    /// Ask the backend for the image's dominant colors and publish them to
    /// the store. Failures are logged and swallowed: the previous palette
    /// keeps its value and no alert is raised.
    pub async fn extract_palette(&self, image_base64: &str) {
        let Some(_busy) = self.begin(Activity::Extracting) else {
            return;
        };
        match self.service.extract_palette(image_base64).await {
            Ok(colors) => self.store.set_palette(colors),
            Err(err) => eprintln!("Palette extraction error: {err:#}"),
        }
    }

    /// Recolor the base image with the extracted palette and move on to
    /// the result view. Both inputs must be present; the check never
    /// reaches the network.
    pub async fn trigger_recolor(&self) {
        let base64 = self
            .store
            .base_image()
            .and_then(|image| image.base64)
            .filter(|payload| !payload.is_empty());
        let palette = self.store.palette();

        let Some(base64) = base64 else {
            self.alert("Please select both images");
            return;
        };
        if palette.is_empty() {
            self.alert("Please select both images");
            return;
        }

        let Some(_busy) = self.begin(Activity::Recoloring) else {
            return;
        };
        match self.service.recolor(&base64, &palette).await {
            Ok(result) => {
                self.store.set_recolor_result(Some(result));
                self.navigated.store(true, Ordering::SeqCst);
                self.emit(UiEvent::Navigate {
                    route: Route::Result,
                });
            }
            Err(err) => {
                eprintln!("Recolor error: {err:#}");
                self.alert("Failed to recolor image");
            }
        }
    }

    /// Put the palette on the clipboard as a comma-separated list.
    pub fn copy_palette(&self) {
        let palette = self.store.palette();
        if palette.is_empty() {
            return;
        }
        match self.clipboard.set_text(&palette.join(", ")) {
            Ok(()) => self.emit(UiEvent::Toast {
                kind: ToastKind::Success,
                title: "Copied!".to_string(),
                message: "Palette saved to clipboard 🎨".to_string(),
                position: ToastPosition::Bottom,
            }),
            Err(err) => eprintln!("Clipboard error: {err:#}"),
        }
    }

    /// Back to the home screen.
    pub fn go_home(&self) {
        self.emit(UiEvent::Navigate { route: Route::Home });
    }

    fn begin(&self, kind: Activity) -> Option<ActivityGuard> {
        let mut slot = self.activity.lock();
        if *slot != Activity::Idle {
            eprintln!("Ignoring {:?} trigger while {:?} is in flight", kind, *slot);
            return None;
        }
        *slot = kind;
        drop(slot);
        Some(ActivityGuard {
            slot: Arc::clone(&self.activity),
        })
    }

    fn alert(&self, message: &str) {
        self.emit(UiEvent::Alert {
            message: message.to_string(),
        });
    }

    fn emit(&self, event: UiEvent) {
        // No subscribers is fine; the host may not be listening yet.
        let _ = self.events.send(event);
    }
}
