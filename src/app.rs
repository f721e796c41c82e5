use crate::screens::{MenuScreen, PicksScreen, SpotsScreen, TypesScreen};

/// The four independent display screens
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Picks,
    Spots,
    Types,
    Menu,
}

impl ScreenId {
    pub const ALL: [ScreenId; 4] = [
        ScreenId::Picks,
        ScreenId::Spots,
        ScreenId::Types,
        ScreenId::Menu,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Picks => "Picks",
            ScreenId::Spots => "Spots",
            ScreenId::Types => "Types",
            ScreenId::Menu => "Menu",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Application state
pub struct App {
    pub screen: ScreenId,
    pub picks: PicksScreen,
    pub spots: SpotsScreen,
    pub types: TypesScreen,
    pub menu: MenuScreen,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: ScreenId::Picks,
            picks: PicksScreen::new(),
            spots: SpotsScreen::new(),
            types: TypesScreen::new(),
            menu: MenuScreen::new(),
            should_quit: false,
        }
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_screen(&mut self, screen: ScreenId) {
        self.screen = screen;
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    /// Move the active screen's selection forward
    pub fn select_next(&mut self) {
        match self.screen {
            ScreenId::Picks => self.picks.select_next(),
            ScreenId::Spots => self.spots.select_next(),
            ScreenId::Types => self.types.select_next(),
            ScreenId::Menu => self.menu.select_next(),
        }
    }

    /// Move the active screen's selection backward
    pub fn select_prev(&mut self) {
        match self.screen {
            ScreenId::Picks => self.picks.select_prev(),
            ScreenId::Spots => self.spots.select_prev(),
            ScreenId::Types => self.types.select_prev(),
            ScreenId::Menu => self.menu.select_prev(),
        }
    }

    /// Step the Menu screen's N; ignored on the other screens
    pub fn adjust_top_n(&mut self, delta: i64) {
        if self.screen == ScreenId::Menu {
            self.menu.adjust_top_n(delta);
        }
    }

    /// Extra status-bar hint for the active screen
    pub fn hint(&self) -> &'static str {
        match self.screen {
            ScreenId::Menu => "j/k:select +/-:top n",
            _ => "j/k:select",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycle_wraps() {
        let mut id = ScreenId::Picks;
        for _ in 0..ScreenId::ALL.len() {
            id = id.next();
        }
        assert!(id == ScreenId::Picks);
    }

    #[test]
    fn test_top_n_only_moves_on_menu_screen() {
        let mut app = App::new();
        let before = app.menu.top_n;
        app.set_screen(ScreenId::Picks);
        app.adjust_top_n(5);
        assert_eq!(app.menu.top_n, before);
        app.set_screen(ScreenId::Menu);
        app.adjust_top_n(5);
        assert_eq!(app.menu.top_n, before + 5);
    }

    #[test]
    fn test_top_n_stays_in_widget_bounds() {
        let mut app = App::new();
        app.set_screen(ScreenId::Menu);
        app.adjust_top_n(1000);
        assert_eq!(app.menu.top_n, crate::screens::MAX_TOP_N);
        app.adjust_top_n(-1000);
        assert_eq!(app.menu.top_n, crate::screens::MIN_TOP_N);
    }
}
