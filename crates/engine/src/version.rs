use std::fmt;

/// Placeholder rendered for a field that was not found in the input.
pub const SENTINEL: &str = "x";

/// One of the three named version components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionField {
    Major,
    Minor,
    Patch,
}

impl VersionField {
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    /// The literal marker searched for in the configuration file.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Major => "LLVM_VERSION_MAJOR",
            Self::Minor => "LLVM_VERSION_MINOR",
            Self::Patch => "LLVM_VERSION_PATCH",
        }
    }
}

/// Extraction result, one slot per field.
///
/// `None` means "not found". The display sentinel only appears at
/// formatting time, so an unresolved field can never be confused with
/// literal file content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionParts {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
}

impl VersionParts {
    pub fn set(&mut self, field: VersionField, value: Option<String>) {
        match field {
            VersionField::Major => self.major = value,
            VersionField::Minor => self.minor = value,
            VersionField::Patch => self.patch = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: VersionField) -> Option<&str> {
        match field {
            VersionField::Major => self.major.as_deref(),
            VersionField::Minor => self.minor.as_deref(),
            VersionField::Patch => self.patch.as_deref(),
        }
    }

    /// True when all three fields were matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        VersionField::ALL.iter().all(|f| self.get(*f).is_some())
    }
}

impl fmt::Display for VersionParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.major.as_deref().unwrap_or(SENTINEL),
            self.minor.as_deref().unwrap_or(SENTINEL),
            self.patch.as_deref().unwrap_or(SENTINEL),
        )
    }
}
