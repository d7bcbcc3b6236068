//! Computation and presentation settings shared by the library and the CLI.

/// How the sports-walking calorie formula divides squared speed by height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, uniffi::Enum)]
pub enum WalkingDivision {
    /// Floor division, matching the historical output of the sensor reports.
    #[default]
    Floor,
    /// Plain floating-point division.
    True,
}

/// Language of the rendered summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, uniffi::Enum)]
pub enum Language {
    #[default]
    English,
    Russian,
}

/// Options that change how summaries are computed and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, uniffi::Record)]
pub struct Settings {
    pub walking_division: WalkingDivision,
    pub language: Language,
}

impl Settings {
    pub fn with_walking_division(mut self, walking_division: WalkingDivision) -> Self {
        self.walking_division = walking_division;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
