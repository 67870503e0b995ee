//! Navigation capability consumed by the dashboards

use std::fmt;

/// Screens a dashboard can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Admin approval queue
    AdminDashboard,
    /// User camera panel
    UserDashboard,
    /// Add camera form
    AddCamera,
    /// Subsidy application form
    SubsidyForm,
}

impl Route {
    /// URL path of the screen
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::AdminDashboard => "/dashboard",
            Self::UserDashboard => "/user-dashboard",
            Self::AddCamera => "/camera/form",
            Self::SubsidyForm => "/subsidy-form",
        }
    }

    /// Route for a URL path
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        [
            Self::AdminDashboard,
            Self::UserDashboard,
            Self::AddCamera,
            Self::SubsidyForm,
        ]
        .into_iter()
        .find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Something that can switch the visible screen
pub trait Navigator {
    /// Switch to `route`
    fn navigate(&mut self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, route: Route) {
        (**self).navigate(route);
    }
}

/// Navigator that only remembers where it was sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    visited: Vec<Route>,
}

impl RecordingNavigator {
    /// Create a navigator with an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes in the order they were requested
    #[must_use]
    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    /// Most recent route
    #[must_use]
    pub fn last(&self) -> Option<Route> {
        self.visited.last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.visited.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paths_round_trip() {
        for route in [
            Route::AdminDashboard,
            Route::UserDashboard,
            Route::AddCamera,
            Route::SubsidyForm,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }

    #[test]
    fn test_recording_navigator_through_mut_ref() {
        fn open_forms<N: Navigator>(mut navigator: N) {
            navigator.navigate(Route::AddCamera);
            navigator.navigate(Route::SubsidyForm);
        }

        let mut navigator = RecordingNavigator::new();
        open_forms(&mut navigator);

        assert_eq!(navigator.visited(), &[Route::AddCamera, Route::SubsidyForm]);
        assert_eq!(navigator.last(), Some(Route::SubsidyForm));
    }
}
