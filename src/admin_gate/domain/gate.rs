//! Gate decision types.

use super::EnvironmentMode;
use tracing::debug;

/// Destination used when administrative access is denied.
pub const NOT_FOUND_PATH: &str = "/404";

/// Capability deciding whether the administrative section may be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAccess {
    /// Requests pass through to the administrative handlers.
    Permitted,
    /// Requests are redirected to [`NOT_FOUND_PATH`].
    Denied,
}

impl AdminAccess {
    /// Derives the capability from the runtime environment mode.
    ///
    /// Only [`EnvironmentMode::Development`] is permitted.
    #[must_use]
    pub const fn for_mode(mode: &EnvironmentMode) -> Self {
        if mode.is_development() {
            Self::Permitted
        } else {
            Self::Denied
        }
    }

    /// Returns `true` when access is permitted.
    #[must_use]
    pub const fn is_permitted(self) -> bool {
        matches!(self, Self::Permitted)
    }
}

/// Result of passing content through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome<T> {
    /// Access granted; the children are returned unchanged.
    Render(T),
    /// Access denied; the caller must navigate to the given path.
    Redirect(&'static str),
}

impl<T> GateOutcome<T> {
    /// Returns the redirect destination, if any.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Render(_) => None,
            Self::Redirect(target) => Some(*target),
        }
    }

    /// Returns the rendered children, discarding a redirect.
    #[must_use]
    pub fn into_rendered(self) -> Option<T> {
        match self {
            Self::Render(children) => Some(children),
            Self::Redirect(_) => None,
        }
    }
}

/// Access-control checkpoint placed before administrative content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminGate {
    access: AdminAccess,
}

impl AdminGate {
    /// Creates a gate from an explicit access capability.
    #[must_use]
    pub const fn new(access: AdminAccess) -> Self {
        Self { access }
    }

    /// Creates a gate for the given environment mode.
    #[must_use]
    pub const fn for_mode(mode: &EnvironmentMode) -> Self {
        Self::new(AdminAccess::for_mode(mode))
    }

    /// Returns the access capability this gate enforces.
    #[must_use]
    pub const fn access(&self) -> AdminAccess {
        self.access
    }

    /// Passes `children` through when access is permitted.
    ///
    /// When access is denied the children are dropped without being
    /// rendered and the outcome carries [`NOT_FOUND_PATH`].
    #[must_use]
    pub fn guard<T>(&self, children: T) -> GateOutcome<T> {
        match self.access {
            AdminAccess::Permitted => GateOutcome::Render(children),
            AdminAccess::Denied => {
                debug!(target_path = NOT_FOUND_PATH, "administrative access denied");
                GateOutcome::Redirect(NOT_FOUND_PATH)
            }
        }
    }
}
