//! Pressable button

use std::fmt;

/// Colour treatment of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTone {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

/// Size of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl fmt::Display for ButtonTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        };
        write!(f, "{}", name)
    }
}

/// Notification emitted by an enabled button, carrying what triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pressed<I> {
    pub origin: I,
}

/// A stateless button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub tone: ButtonTone,
    pub size: ButtonSize,
    pub disabled: bool,
}

impl ActionButton {
    /// A primary, medium, enabled button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tone: ButtonTone::default(),
            size: ButtonSize::default(),
            disabled: false,
        }
    }

    /// Set the tone
    pub fn tone(mut self, tone: ButtonTone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Enable or disable
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Activate the button
    ///
    /// Disabled buttons swallow the interaction and return `None`.
    pub fn press<I>(&self, origin: I) -> Option<Pressed<I>> {
        if self.disabled {
            None
        } else {
            Some(Pressed { origin })
        }
    }

    /// Style classes, `"<tone> <size>"`
    pub fn classes(&self) -> String {
        format!("{} {}", self.tone, self.size)
    }
}
