use serde::{Deserialize, Serialize};

/// Which screen the sheet is showing.
///
/// Flow: `Home -> Setup -> Game`, `Setup -> Home` (back), and
/// `Game -> Home` only through a confirmed exit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    Setup,
    Game,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Setup => "setup",
            Screen::Game => "game",
        };
        f.write_str(name)
    }
}
