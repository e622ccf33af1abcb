use crate::error::PortalError;

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Glyphs the portal draws. Rendering lives in `shared-ui`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    House,
    Comment,
    Package,
    PackageOpen,
    Users,
    UserPlus,
    ClipboardList,
    Paw,
}

/// Accent colour used by tiles and modal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl Accent {
    /// Value of the `data-accent` attribute the stylesheets key on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Red => "red",
        }
    }
}

/// One of the dashboard shortcut categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Packages,
    Visitors,
    Notices,
    Pets,
}

/// Modules in dashboard grid order.
pub const ALL_MODULES: &[Module] = &[
    Module::Packages,
    Module::Visitors,
    Module::Notices,
    Module::Pets,
];

impl Module {
    pub fn path(&self) -> &'static str {
        match self {
            Module::Packages => "/encomendas",
            Module::Visitors => "/visitantes",
            Module::Notices => "/avisos",
            Module::Pets => "/pets",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Module::Packages => "Encomendas",
            Module::Visitors => "Visitantes",
            Module::Notices => "Avisos",
            Module::Pets => "Pets",
        }
    }

    /// Caption shown under the title on the dashboard tile.
    pub fn caption(&self) -> &'static str {
        match self {
            Module::Packages => "Gerenciar entregas",
            Module::Visitors => "Liberar acesso",
            Module::Notices => "Comunicados",
            Module::Pets => "Meus animais",
        }
    }

    pub fn glyph(&self) -> Glyph {
        match self {
            Module::Packages => Glyph::PackageOpen,
            Module::Visitors => Glyph::UserPlus,
            Module::Notices => Glyph::ClipboardList,
            Module::Pets => Glyph::Paw,
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Module::Packages => Accent::Blue,
            Module::Visitors => Accent::Green,
            Module::Notices => Accent::Purple,
            Module::Pets => Accent::Orange,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        ALL_MODULES.iter().copied().find(|m| m.path() == path)
    }
}

/// Screen a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Placeholder(Module),
}

impl Screen {
    /// Strict lookup; unknown paths are an error.
    pub fn for_path(path: &str) -> Result<Self, PortalError> {
        match path {
            LOGIN_PATH => Ok(Screen::Login),
            DASHBOARD_PATH => Ok(Screen::Dashboard),
            other => Module::from_path(other)
                .map(Screen::Placeholder)
                .ok_or_else(|| PortalError::unknown_path(other)),
        }
    }
}

/// An entry of the fixed footer navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
}

impl NavItem {
    /// Exact match only; `/dashboard/x` does not activate `/dashboard`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        path: DASHBOARD_PATH,
        label: "Início",
        glyph: Glyph::House,
    },
    NavItem {
        path: "/avisos",
        label: "Avisos",
        glyph: Glyph::Comment,
    },
    NavItem {
        path: "/encomendas",
        label: "Encomendas",
        glyph: Glyph::Package,
    },
    NavItem {
        path: "/visitantes",
        label: "Visitantes",
        glyph: Glyph::Users,
    },
];

/// Index of the footer entry matching `current_path`, if any.
pub fn active_nav_index(current_path: &str) -> Option<usize> {
    NAV_ITEMS.iter().position(|item| item.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalErrorKind;

    #[test]
    fn known_paths_resolve_to_their_screens() {
        assert_eq!(Screen::for_path("/").unwrap(), Screen::Login);
        assert_eq!(Screen::for_path("/dashboard").unwrap(), Screen::Dashboard);
        assert_eq!(
            Screen::for_path("/avisos").unwrap(),
            Screen::Placeholder(Module::Notices)
        );
        assert_eq!(
            Screen::for_path("/encomendas").unwrap(),
            Screen::Placeholder(Module::Packages)
        );
        assert_eq!(
            Screen::for_path("/visitantes").unwrap(),
            Screen::Placeholder(Module::Visitors)
        );
        assert_eq!(
            Screen::for_path("/pets").unwrap(),
            Screen::Placeholder(Module::Pets)
        );
    }

    #[test]
    fn near_misses_are_unknown() {
        for path in ["/garagem", "/dashboard/", "/PETS", "", "/pets/1", "dashboard"] {
            assert!(Screen::for_path(path).is_err(), "path {path:?}");
        }
    }

    #[test]
    fn strict_lookup_reports_unknown_paths() {
        let err = Screen::for_path("/garagem").unwrap_err();
        assert_eq!(err.kind, PortalErrorKind::UnknownPath);
    }

    #[test]
    fn module_paths_round_trip() {
        for module in ALL_MODULES {
            assert_eq!(Module::from_path(module.path()), Some(*module));
        }
    }

    #[test]
    fn exactly_one_footer_entry_is_active_on_its_own_path() {
        for (idx, item) in NAV_ITEMS.iter().enumerate() {
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|other| other.is_active(item.path))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active_nav_index(item.path), Some(idx));
        }
    }

    #[test]
    fn footer_highlight_requires_exact_match() {
        assert_eq!(active_nav_index("/dashboard/extra"), None);
        assert_eq!(active_nav_index("/avisos?x=1"), None);
        assert_eq!(active_nav_index("/pets"), None);
        assert_eq!(active_nav_index("/"), None);
    }

    #[test]
    fn pets_is_not_in_the_footer_but_is_a_module() {
        assert!(NAV_ITEMS.iter().all(|item| item.path != Module::Pets.path()));
        assert_eq!(Module::Pets.title(), "Pets");
    }
}
