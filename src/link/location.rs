//! Where the current shareable link lives
//!
//! In a browser this is the address bar. Here it is a trait, so the
//! planner can be driven against any notion of "current address"; the
//! front ends use the in-memory one, seeded from the `--link` option.

use super::ShareLink;
use crate::error::{PlannerError, PlannerResult};

/// The current link of a planner session
pub trait LinkLocation {
    /// Read the current link
    fn current(&self) -> PlannerResult<ShareLink>;

    /// Replace the current link in place
    ///
    /// Never adds a navigation history entry.
    fn replace(&mut self, link: ShareLink) -> PlannerResult<()>;
}

/// A link held in memory
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    link: ShareLink,
    history_len: usize,
    read_only: bool,
}

impl MemoryLocation {
    /// Start at `link`
    pub fn new(link: ShareLink) -> Self {
        Self {
            link,
            history_len: 1,
            read_only: false,
        }
    }

    /// Start at a link parsed from `s`
    pub fn parse(s: &str) -> Self {
        Self::new(ShareLink::parse(s))
    }

    /// Navigate to `link`, adding a history entry
    pub fn assign(&mut self, link: ShareLink) {
        self.link = link;
        self.history_len += 1;
    }

    /// Make every `replace` fail, as a sandboxed page would
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of navigation history entries
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// The link as last written
    pub fn link(&self) -> &ShareLink {
        &self.link
    }
}

impl LinkLocation for MemoryLocation {
    fn current(&self) -> PlannerResult<ShareLink> {
        Ok(self.link.clone())
    }

    fn replace(&mut self, link: ShareLink) -> PlannerResult<()> {
        if self.read_only {
            return Err(PlannerError::Link("location is read-only".into()));
        }
        self.link = link;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_replace_keeps_history_length() {
        let mut location = MemoryLocation::parse("/plan#top");
        location
            .replace(ShareLink::parse("/plan?team=A#top"))
            .unwrap();
        location
            .replace(ShareLink::parse("/plan?team=B#top"))
            .unwrap();

        assert_eq!(location.history_len(), 1);
        assert_eq!(location.current().unwrap().get("team"), Some("B"));
    }

    #[test]
    fn test_assign_adds_history_entry() {
        let mut location = MemoryLocation::parse("/plan");
        location.assign(ShareLink::parse("/other?team=A"));
        assert_eq!(location.history_len(), 2);

        location.replace(ShareLink::parse("/other?team=B")).unwrap();
        assert_eq!(location.history_len(), 2);
        assert_eq!(location.link().get("team"), Some("B"));
    }

    #[test]
    fn test_memory_read_only_rejects_replace() {
        let mut location = MemoryLocation::parse("/plan").read_only();
        let err = location.replace(ShareLink::parse("/plan?a=1")).unwrap_err();
        assert!(matches!(err, PlannerError::Link(_)));
        assert!(!location.current().unwrap().has_params());
    }
}
