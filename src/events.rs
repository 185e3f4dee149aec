//! Value contract between the workflow core and the host UI, mirroring an
//! emit-style bridge: the controller publishes events, the front-end
//! renders them however it likes.

/// Severity tag the host notifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    Bottom,
}

/// Destinations the workflow navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Result,
}

impl Route {
    /// Route identifier as the host router spells it.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Result => "/result",
        }
    }
}

/// Events emitted toward the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Transient notification.
    Toast {
        kind: ToastKind,
        title: String,
        message: String,
        position: ToastPosition,
    },
    /// Blocking message the user has to acknowledge.
    Alert { message: String },
    /// Forward navigation request.
    Navigate { route: Route },
}

/// Clipboard-write facility provided by the host.
pub trait Clipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Stand-in used by the demo binary: "copies" by printing the text.
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        println!("[clipboard] {text}");
        Ok(())
    }
}
