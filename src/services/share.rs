//! Share cascade
//!
//! Sharing tries the platform share capability first, then the clipboard,
//! and finally hands the link back for the user to copy by hand. Each tier
//! is optional except the last, which cannot fail.

use tracing::debug;

use crate::error::PlannerResult;

/// What gets shared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    /// Title for the share sheet, `"<team> Budget"`
    pub title: String,
    /// The shareable link
    pub url: String,
}

/// A platform share sheet
pub trait PlatformShare {
    /// Offer the request to the platform; an error means rejected or failed
    fn share(&mut self, request: &ShareRequest) -> PlannerResult<()>;
}

/// A system clipboard
pub trait Clipboard {
    /// Put `text` on the clipboard
    fn write_text(&mut self, text: &str) -> PlannerResult<()>;
}

/// How a share attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform share sheet took the link
    Shared,
    /// The link was copied to the clipboard
    Copied,
    /// Nothing automatic worked; the link must be copied by hand
    Manual { url: String },
}

impl ShareOutcome {
    /// Message to show the user
    pub fn message(&self) -> String {
        match self {
            Self::Shared => "Budget shared.".to_string(),
            Self::Copied => "URL copied to clipboard!".to_string(),
            Self::Manual { url } => format!("Copy this URL: {}", url),
        }
    }
}

/// Platform share, then clipboard, then manual copy
#[derive(Default)]
pub struct ShareCascade {
    platform: Option<Box<dyn PlatformShare>>,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl ShareCascade {
    /// A cascade with no automatic tiers; always ends in manual copy
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a platform share tier
    pub fn with_platform(mut self, platform: Box<dyn PlatformShare>) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Add a clipboard tier
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Run the cascade for one request
    pub fn share(&mut self, request: &ShareRequest) -> ShareOutcome {
        if let Some(platform) = self.platform.as_mut() {
            match platform.share(request) {
                Ok(()) => return ShareOutcome::Shared,
                Err(e) => debug!(error = %e, "Platform share failed, trying clipboard"),
            }
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.write_text(&request.url) {
                Ok(()) => return ShareOutcome::Copied,
                Err(e) => debug!(error = %e, "Clipboard copy failed, asking for manual copy"),
            }
        }

        ShareOutcome::Manual {
            url: request.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct FakePlatform {
        accept: bool,
        log: Log,
    }

    impl PlatformShare for FakePlatform {
        fn share(&mut self, request: &ShareRequest) -> PlannerResult<()> {
            self.log.borrow_mut().push(format!("share:{}", request.title));
            if self.accept {
                Ok(())
            } else {
                Err(PlannerError::Share("dismissed".into()))
            }
        }
    }

    struct FakeClipboard {
        accept: bool,
        log: Log,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> PlannerResult<()> {
            self.log.borrow_mut().push(format!("copy:{}", text));
            if self.accept {
                Ok(())
            } else {
                Err(PlannerError::Share("denied".into()))
            }
        }
    }

    fn request() -> ShareRequest {
        ShareRequest {
            title: "Wolves Budget".into(),
            url: "/plan?team=Wolves".into(),
        }
    }

    fn cascade(platform: Option<bool>, clipboard: Option<bool>, log: &Log) -> ShareCascade {
        let mut cascade = ShareCascade::new();
        if let Some(accept) = platform {
            cascade = cascade.with_platform(Box::new(FakePlatform {
                accept,
                log: log.clone(),
            }));
        }
        if let Some(accept) = clipboard {
            cascade = cascade.with_clipboard(Box::new(FakeClipboard {
                accept,
                log: log.clone(),
            }));
        }
        cascade
    }

    #[test]
    fn test_platform_share_stops_cascade() {
        let log = Log::default();
        let outcome = cascade(Some(true), Some(true), &log).share(&request());

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(*log.borrow(), vec!["share:Wolves Budget".to_string()]);
    }

    #[test]
    fn test_rejected_share_falls_back_to_clipboard() {
        let log = Log::default();
        let outcome = cascade(Some(false), Some(true), &log).share(&request());

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(log.borrow()[1], "copy:/plan?team=Wolves");
    }

    #[test]
    fn test_no_platform_goes_straight_to_clipboard() {
        let log = Log::default();
        let outcome = cascade(None, Some(true), &log).share(&request());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_everything_failing_ends_in_manual_copy() {
        let log = Log::default();
        let outcome = cascade(Some(false), Some(false), &log).share(&request());

        assert_eq!(
            outcome,
            ShareOutcome::Manual {
                url: "/plan?team=Wolves".into()
            }
        );
        assert_eq!(outcome.message(), "Copy this URL: /plan?team=Wolves");
    }

    #[test]
    fn test_empty_cascade_is_manual() {
        let outcome = ShareCascade::new().share(&request());
        assert!(matches!(outcome, ShareOutcome::Manual { .. }));
    }
}
