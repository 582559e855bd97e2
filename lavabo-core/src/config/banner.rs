//! Build identification shown at startup

/// Build and device identity, logged and displayed once at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuildInfo {
    /// Product name
    pub name: &'static str,
    /// Firmware version (shown on screen)
    pub version: &'static str,
    /// Build identifier (profile, date or commit)
    pub build: &'static str,
    /// Device host name
    pub hostname: &'static str,
}

impl BuildInfo {
    /// Short form for the display: just the version
    pub fn short(&self) -> &'static str {
        self.version
    }
}
