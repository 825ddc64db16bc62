use derive_more::Display;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The lifecycle every component of a container shares.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LifecycleMode {
    /// One instance per name, kept for the lifetime of the container.
    #[default]
    #[display(fmt = "SINGLETON")]
    #[cfg_attr(feature = "serde", serde(rename = "SINGLETON"))]
    Singleton,

    /// Instances are lent from a pool for one session and returned after.
    #[display(fmt = "MULTI_INSTANCE")]
    #[cfg_attr(feature = "serde", serde(rename = "MULTI_INSTANCE"))]
    Pooled,
}

/// A keyword read from field annotations.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Keyword(Cow<'static, str>);

impl Keyword {
    /// The default key of the container annotation.
    pub const CONTAINER: Keyword = Keyword(Cow::Borrowed("container"));

    /// The default sub-key holding the auto-wire flag.
    pub const AUTO_WIRE: Keyword = Keyword(Cow::Borrowed("autowire"));

    /// The default sub-key holding the bound component name.
    pub const RESOURCE: Keyword = Keyword(Cow::Borrowed("resource"));

    /// Creates a new keyword.
    #[must_use]
    pub fn new(keyword: impl Into<Cow<'static, str>>) -> Self {
        Keyword(keyword.into())
    }

    /// Gets the keyword as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn or(self, default: Keyword) -> Keyword {
        if self.0.is_empty() {
            default
        } else {
            self
        }
    }
}

impl From<&'static str> for Keyword {
    fn from(keyword: &'static str) -> Self {
        Keyword::new(keyword)
    }
}

impl From<String> for Keyword {
    fn from(keyword: String) -> Self {
        Keyword::new(keyword)
    }
}

/// Configuration of a container.
///
/// ```
/// use graph_injector::{Config, LifecycleMode};
///
/// let config = Config::default()
///     .with_mode(LifecycleMode::Pooled)
///     .with_tag_keyword("di");
///
/// assert!(config.auto_wire);
/// assert_eq!("di", config.tag_keyword.as_str());
/// assert_eq!("resource", config.resource_keyword.as_str());
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Whether annotated fields without an explicit auto-wire flag are
    /// injected. In pooled mode, injected fields are reset when the instance
    /// is released.
    pub auto_wire: bool,

    /// The annotation key read from each field.
    pub tag_keyword: Keyword,

    /// The sub-key read for the auto-wire flag.
    pub auto_wire_keyword: Keyword,

    /// The sub-key read for the bound component name.
    pub resource_keyword: Keyword,

    /// The lifecycle of every component in the container.
    pub mode: LifecycleMode,
}

impl Config {
    /// Sets the auto-wire default.
    #[must_use]
    pub fn with_auto_wire(mut self, auto_wire: bool) -> Self {
        self.auto_wire = auto_wire;
        self
    }

    /// Sets the lifecycle mode.
    #[must_use]
    pub fn with_mode(mut self, mode: LifecycleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the annotation key.
    #[must_use]
    pub fn with_tag_keyword(mut self, keyword: impl Into<Keyword>) -> Self {
        self.tag_keyword = keyword.into();
        self
    }

    /// Sets the auto-wire sub-key.
    #[must_use]
    pub fn with_auto_wire_keyword(mut self, keyword: impl Into<Keyword>) -> Self {
        self.auto_wire_keyword = keyword.into();
        self
    }

    /// Sets the resource sub-key.
    #[must_use]
    pub fn with_resource_keyword(mut self, keyword: impl Into<Keyword>) -> Self {
        self.resource_keyword = keyword.into();
        self
    }

    /// Replaces empty keywords with their defaults.
    pub(crate) fn normalized(self) -> Self {
        Config {
            tag_keyword: self.tag_keyword.or(Keyword::CONTAINER),
            auto_wire_keyword: self.auto_wire_keyword.or(Keyword::AUTO_WIRE),
            resource_keyword: self.resource_keyword.or(Keyword::RESOURCE),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            auto_wire: true,
            tag_keyword: Keyword::CONTAINER,
            auto_wire_keyword: Keyword::AUTO_WIRE,
            resource_keyword: Keyword::RESOURCE,
            mode: LifecycleMode::Singleton,
        }
    }
}
