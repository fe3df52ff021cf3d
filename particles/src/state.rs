use std::fmt;

use serde_derive::*;

use shapes::{Language, ShapeConfig, ShapeKey};

/// Named visual mode. Paint mode is tracked separately by the painter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SceneState {
    Home,
    About,
    Projects,
    Contact,
    RustLogo,
    PythonLogo,
    JavascriptLogo,
    CppLogo,
}

impl SceneState {
    pub const SECTIONS: [SceneState; 4] = [SceneState::Home, SceneState::About, SceneState::Projects, SceneState::Contact];

    pub fn language(&self) -> Option<Language> {
        match self {
            SceneState::RustLogo => Some(Language::Rust),
            SceneState::PythonLogo => Some(Language::Python),
            SceneState::JavascriptLogo => Some(Language::Javascript),
            SceneState::CppLogo => Some(Language::Cpp),
            _ => None,
        }
    }

    /// The coordinate set shown for this state.
    pub fn shape(&self, shapes: &ShapeConfig) -> ShapeKey {
        match self {
            SceneState::Home => ShapeKey::Home,
            SceneState::About => shapes.about,
            SceneState::Projects => shapes.projects,
            SceneState::Contact => shapes.contact,
            logo => match logo.language() {
                Some(language) => ShapeKey::Logo(language),
                None => ShapeKey::Home,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SceneState::Home => "home",
            SceneState::About => "about",
            SceneState::Projects => "projects",
            SceneState::Contact => "contact",
            SceneState::RustLogo => "rust_logo",
            SceneState::PythonLogo => "python_logo",
            SceneState::JavascriptLogo => "javascript_logo",
            SceneState::CppLogo => "cpp_logo",
        }
    }
}

impl fmt::Display for SceneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
