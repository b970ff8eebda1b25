use colored::Colorize;

/// How a tracked file in the working directory differs from its recorded blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ModificationType {
    Modified,
    Deleted,
}

impl From<&ModificationType> for &str {
    fn from(change: &ModificationType) -> Self {
        match change {
            ModificationType::Modified => "modified",
            ModificationType::Deleted => "deleted",
        }
    }
}

impl ModificationType {
    /// Render `path` with its modification suffix, e.g. `a.txt (modified)`
    pub fn describe(&self, path: &str, color: bool) -> String {
        let label: &str = self.into();
        let line = format!("{} ({})", path, label);

        if color {
            line.red().to_string()
        } else {
            line
        }
    }
}

impl std::fmt::Display for ModificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "({})", label)
    }
}
