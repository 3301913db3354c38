#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value stored under the `light-theme` key.
    pub fn as_stored(&self) -> &'static str {
        match self {
            Theme::Light => "enabled",
            Theme::Dark => "disabled",
        }
    }

    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("enabled") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn logo(&self) -> &'static str {
        match self {
            Theme::Light => "./assets/logo-light.svg",
            Theme::Dark => "./assets/logo-dark.svg",
        }
    }
}

/// UI flags persisted separately from the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub active_board: Option<String>,
    pub show_sidebar: bool,
    pub theme: Theme,
}
