//! Home directory isolation that also works on Windows.
//!
//! `dirs::config_dir()` ignores `HOME` on Windows, so `XDG_CONFIG_HOME` is
//! set as well; tsinit consults it before the platform directory.

use std::path::Path;
use std::process::Command;

pub trait WindowsCompatExt {
    /// Point every user-level lookup at `home`.
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl WindowsCompatExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("APPDATA", home.join("AppData"))
            .env("XDG_CONFIG_HOME", home.join(".config"))
    }
}
