use std::fmt;

/// Package managers the installer stage can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 2] = [Self::Npm, Self::Yarn];

    /// Executable name as found on `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Arguments for a plain dependency install.
    pub fn install_args(self) -> &'static [&'static str] {
        &["install"]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// One entry of the installer's selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChoice {
    Manager(PackageManager),
    Skip,
}

impl InstallChoice {
    /// Choices in the order they are presented.
    pub fn all() -> Vec<InstallChoice> {
        PackageManager::ALL
            .into_iter()
            .map(Self::Manager)
            .chain(std::iter::once(Self::Skip))
            .collect()
    }

    pub fn label(self) -> String {
        match self {
            Self::Manager(pm) => format!("Yes, use {pm}"),
            Self::Skip => "No, I will handle that myself".into(),
        }
    }
}
