//! Volume option types

/// Options for removing a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeRemoveOptions {
    /// Volume name
    pub volume_id: String,
    /// Remove even if the volume is in use
    pub force: bool,
}

impl VolumeRemoveOptions {
    /// Remove `volume_id` without force.
    pub fn new(volume_id: impl Into<String>) -> Self {
        Self {
            volume_id: volume_id.into(),
            force: false,
        }
    }

    /// Remove even if in use.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}
