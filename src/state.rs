/// Operation currently in flight. Anything other than `Idle` counts as
/// loading and blocks further triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Extracting,
    Recoloring,
}

/// The screen's workflow state.
///
/// `Idle -> Ready -> Extracting -> PaletteAvailable -> Recoloring ->
/// Complete`, where extraction failure falls back to the previous
/// palette-derived state and `Complete` means result navigation has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Ready,
    Extracting,
    PaletteAvailable,
    Recoloring,
    Complete,
}

impl WorkflowState {
    /// Derive the state from the store slots and the in-flight marker. A
    /// palette on screen wins over the image slot: clearing the palette
    /// image keeps the extracted colors visible.
    pub fn derive(
        has_palette_image: bool,
        has_palette: bool,
        activity: Activity,
        navigated: bool,
    ) -> Self {
        match activity {
            Activity::Extracting => Self::Extracting,
            Activity::Recoloring => Self::Recoloring,
            Activity::Idle => {
                if navigated {
                    Self::Complete
                } else if has_palette {
                    Self::PaletteAvailable
                } else if has_palette_image {
                    Self::Ready
                } else {
                    Self::Idle
                }
            }
        }
    }

    pub fn is_loading(self) -> bool {
        matches!(self, Self::Extracting | Self::Recoloring)
    }
}
