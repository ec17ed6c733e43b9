//! Navigation hints derived from a single target.
//!
//! The header redirect and the client-side hints (timer and fallback link)
//! are computed from the same [`TargetUrl`], so they cannot drift apart.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::target::TargetUrl;

/// Delay before the client-side timer navigates, in milliseconds.
pub const REDIRECT_DELAY_MS: u64 = 3000;

/// Status code used for the header redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedirectStatus {
    /// 302 Found.
    #[default]
    Found,
    /// 303 See Other.
    SeeOther,
    /// 307 Temporary Redirect.
    Temporary,
    /// 308 Permanent Redirect. Browsers cache it; use with care.
    Permanent,
}

impl RedirectStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            RedirectStatus::Found => StatusCode::FOUND,
            RedirectStatus::SeeOther => StatusCode::SEE_OTHER,
            RedirectStatus::Temporary => StatusCode::TEMPORARY_REDIRECT,
            RedirectStatus::Permanent => StatusCode::PERMANENT_REDIRECT,
        }
    }

    pub fn code(self) -> u16 {
        self.status_code().as_u16()
    }
}

/// What causes the page to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    HeaderRedirect,
    TimerExpiry,
    ManualClick,
}

impl Trigger {
    pub fn describe(self) -> &'static str {
        match self {
            Trigger::HeaderRedirect => "header redirect",
            Trigger::TimerExpiry => "timer expiry",
            Trigger::ManualClick => "manual click",
        }
    }
}

/// Lifecycle of the page in the browsing context. `Redirected` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loaded,
    Redirected(Trigger),
}

impl PageState {
    /// First trigger wins; later ones have no effect.
    pub fn fire(self, trigger: Trigger) -> PageState {
        match self {
            PageState::Loaded => PageState::Redirected(trigger),
            redirected @ PageState::Redirected(_) => redirected,
        }
    }
}

/// Client-side hints embedded in the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientHints<'a> {
    pub delay_ms: u64,
    pub href: &'a str,
}

/// Both navigation hints for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationPlan {
    target: TargetUrl,
    header: Option<RedirectStatus>,
}

impl NavigationPlan {
    /// `server_redirect == false` is static mode: no header redirect, the page alone navigates.
    pub fn new(target: TargetUrl, server_redirect: bool, status: RedirectStatus) -> Self {
        Self {
            target,
            header: server_redirect.then_some(status),
        }
    }

    pub fn target(&self) -> &TargetUrl {
        &self.target
    }

    /// Status and `Location` value, or `None` in static mode.
    pub fn header(&self) -> Option<(RedirectStatus, &str)> {
        self.header.map(|status| (status, self.target.as_str()))
    }

    pub fn client(&self) -> ClientHints<'_> {
        ClientHints {
            delay_ms: REDIRECT_DELAY_MS,
            href: self.target.as_str(),
        }
    }

    /// The trigger expected to move the page out of `Loaded` first.
    pub fn expected_trigger(&self) -> Trigger {
        if self.header.is_some() {
            Trigger::HeaderRedirect
        } else {
            Trigger::TimerExpiry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> TargetUrl {
        TargetUrl::parse("http://localhost:8080").unwrap()
    }

    #[test]
    fn header_and_client_hints_share_the_target() {
        let plan = NavigationPlan::new(target(), true, RedirectStatus::Found);
        let (status, location) = plan.header().unwrap();
        assert_eq!(status.code(), 302);
        assert_eq!(location, "http://localhost:8080");
        assert_eq!(plan.client().href, location);
        assert_eq!(plan.client().delay_ms, 3000);
    }

    #[test]
    fn static_mode_has_no_header() {
        let plan = NavigationPlan::new(target(), false, RedirectStatus::Permanent);
        assert!(plan.header().is_none());
        assert_eq!(plan.client().href, "http://localhost:8080");
        assert_eq!(plan.expected_trigger(), Trigger::TimerExpiry);
    }

    #[test]
    fn expected_trigger_is_header_when_redirecting() {
        let plan = NavigationPlan::new(target(), true, RedirectStatus::SeeOther);
        assert_eq!(plan.expected_trigger(), Trigger::HeaderRedirect);
    }

    #[test]
    fn first_trigger_wins() {
        let state = PageState::Loaded
            .fire(Trigger::ManualClick)
            .fire(Trigger::TimerExpiry);
        assert_eq!(state, PageState::Redirected(Trigger::ManualClick));
    }

    #[test]
    fn redirect_status_codes() {
        assert_eq!(RedirectStatus::default(), RedirectStatus::Found);
        assert_eq!(RedirectStatus::SeeOther.code(), 303);
        assert_eq!(RedirectStatus::Temporary.code(), 307);
        assert_eq!(RedirectStatus::Permanent.code(), 308);
        assert_eq!(RedirectStatus::Found.status_code(), StatusCode::FOUND);
    }
}
