//! Current space number and the menu-bar style indicator.

use std::fmt;

use crate::desktop::types::DisplaySpaces;

/// Position of the active space among all spaces, both 1-based counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceIndicator {
    pub active: usize,
    pub total: usize,
}

impl SpaceIndicator {
    /// Locates the active space in the first display that reports one.
    #[must_use]
    pub fn from_displays(displays: &[DisplaySpaces]) -> Option<Self> {
        displays.iter().find_map(|display| {
            let current = display.current?;
            let index = display.spaces.iter().position(|s| s.id == current.id)?;
            Some(Self {
                active: index + 1,
                total: display.spaces.len(),
            })
        })
    }
}

/// Renders `1 [2] 3` with the active space bracketed.
impl fmt::Display for SpaceIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in 1..=self.total {
            if n > 1 {
                f.write_str(" ")?;
            }
            if n == self.active {
                write!(f, "[{n}]")?;
            } else {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}

/// 1-based number of the active space, if any display reports one.
#[must_use]
pub fn current_space_number(displays: &[DisplaySpaces]) -> Option<usize> {
    SpaceIndicator::from_displays(displays).map(|i| i.active)
}
