//! Navigation for the console session

use secureeye_protocol::{Navigator, Route};
use tracing::info;

/// Remembers navigation requests until the session reports them
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    history: Vec<Route>,
    reported: usize,
}

impl ConsoleNavigator {
    /// Create a navigator with no history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route requested so far
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Routes requested since the last call
    pub fn take_unreported(&mut self) -> Vec<Route> {
        let fresh = self.history.get(self.reported..).unwrap_or_default().to_vec();
        self.reported = self.history.len();
        fresh
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, route: Route) {
        info!(%route, "Navigation requested");
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_take_unreported() {
        let mut navigator = ConsoleNavigator::new();
        navigator.navigate(Route::AddCamera);

        assert_eq!(navigator.take_unreported(), vec![Route::AddCamera]);
        assert!(navigator.take_unreported().is_empty());

        navigator.navigate(Route::SubsidyForm);
        assert_eq!(navigator.take_unreported(), vec![Route::SubsidyForm]);
        assert_eq!(navigator.history().len(), 2);
    }
}
