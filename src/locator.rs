//! Declarative element locators, resolved at the moment of use

use std::fmt;

use thirtyfour::By;

/// Resolution strategy for a [`Locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Match on the element's `id` attribute
    Id,
    /// Match an XPath expression
    XPath,
    /// Match a CSS selector
    Css,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Id => "id",
            Strategy::XPath => "xpath",
            Strategy::Css => "css",
        }
    }
}

/// A named (strategy, selector) pair identifying at most one element.
///
/// A locator is never a live element reference. It is re-resolved on every
/// use; the page re-renders asynchronously and invalidates prior handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    name: &'static str,
    strategy: Strategy,
    selector: &'static str,
}

impl Locator {
    pub const fn id(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            strategy: Strategy::Id,
            selector,
        }
    }

    pub const fn xpath(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            strategy: Strategy::XPath,
            selector,
        }
    }

    pub const fn css(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            strategy: Strategy::Css,
            selector,
        }
    }

    /// Logical name, used in logs and timeout diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn selector(&self) -> &'static str {
        self.selector
    }

    /// Build the WebDriver query for this locator.
    pub fn by(&self) -> By {
        match self.strategy {
            Strategy::Id => By::Id(self.selector),
            Strategy::XPath => By::XPath(self.selector),
            Strategy::Css => By::Css(self.selector),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({}: {})", self.name, self.strategy.as_str(), self.selector)
    }
}
