/// Frame-counted input suppression shared by every phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FrameDebounce {
    absorbing: u32,
}

impl FrameDebounce {
    /// Arms the gate; the next `frames + 1` calls to [`Self::absorb`] swallow their update.
    pub(crate) fn arm(&mut self, frames: u32) {
        self.absorbing = frames.saturating_add(1);
    }

    /// Returns true when this update must be skipped.
    pub(crate) fn absorb(&mut self) -> bool {
        if self.absorbing == 0 {
            return false;
        }
        self.absorbing -= 1;
        true
    }

    pub(crate) fn is_active(&self) -> bool {
        self.absorbing > 0
    }
}
