use crate::Handler;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// Title shown when none is given.
pub const DEFAULT_TITLE: &str = "Error";

/// Status code used when none is given.
pub const DEFAULT_RESPONSE: u16 = 500;

// Codes out of range map to 0, which has no reason phrase.
#[inline]
fn narrow(code: i32) -> u16 {
    u16::try_from(code).unwrap_or(0)
}

/// The title argument of `respond`.
///
/// An integer is shorthand for the response code, the title then falls back to the default.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Title {
    /// Display string.
    Text(String),

    /// Response code shorthand.
    Response(u16),
}

impl Default for Title {
    #[inline]
    fn default() -> Self {
        Title::Text(DEFAULT_TITLE.to_string())
    }
}

impl From<&str> for Title {
    #[inline]
    fn from(title: &str) -> Self {
        Title::Text(title.to_string())
    }
}

impl From<String> for Title {
    #[inline]
    fn from(title: String) -> Self {
        Title::Text(title)
    }
}

impl From<u16> for Title {
    #[inline]
    fn from(code: u16) -> Self {
        Title::Response(code)
    }
}

impl From<i32> for Title {
    #[inline]
    fn from(code: i32) -> Self {
        Title::Response(narrow(code))
    }
}

/// The options argument of `respond`.
///
/// An integer is shorthand for `Options::new().response(code)`.
#[derive(Debug, Clone)]
pub enum Args {
    /// Full options.
    Options(Options),

    /// Response code shorthand.
    Response(u16),
}

impl Default for Args {
    #[inline]
    fn default() -> Self {
        Args::Options(Options::default())
    }
}

impl From<Options> for Args {
    #[inline]
    fn from(options: Options) -> Self {
        Args::Options(options)
    }
}

impl From<u16> for Args {
    #[inline]
    fn from(code: u16) -> Self {
        Args::Response(code)
    }
}

impl From<i32> for Args {
    #[inline]
    fn from(code: i32) -> Self {
        Args::Response(narrow(code))
    }
}

impl From<()> for Args {
    #[inline]
    fn from(_: ()) -> Self {
        Args::default()
    }
}

/// Options of an error page, every field optional.
///
/// ### Example
/// ```rust
/// use halt::Options;
///
/// let options = Options::new()
///     .response(403)
///     .back_link(true)
///     .extra("link_url", "/login");
/// let settings = options.settings();
/// assert_eq!(403, settings.response);
/// assert!(settings.back_link);
/// assert_eq!(Some("/login"), settings.extra("link_url"));
/// ```
#[derive(Clone, Default)]
pub struct Options {
    /// Status code, 500 if absent.
    pub response: Option<u16>,

    /// Whether to append a link back to the previous page, false if absent.
    pub back_link: Option<bool>,

    /// Rendering strategy, the app's handler if absent.
    pub handler: Option<Arc<dyn Handler>>,

    /// Keys this crate doesn't know, handed to the handler untouched.
    pub extra: HashMap<String, String>,
}

impl Options {
    /// Construct empty options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status code.
    #[inline]
    pub fn response(mut self, code: u16) -> Self {
        self.response = Some(code);
        self
    }

    /// Set whether to append a back link.
    #[inline]
    pub fn back_link(mut self, back_link: bool) -> Self {
        self.back_link = Some(back_link);
        self
    }

    /// Set the rendering strategy of this call.
    #[inline]
    pub fn handler(mut self, handler: impl Handler) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Add an extra key.
    #[inline]
    pub fn extra(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.extra.insert(key.to_string(), value.to_string());
        self
    }

    /// Merge over the defaults `{ response: 500, back_link: false }`.
    pub fn settings(&self) -> Settings {
        Settings {
            response: self.response.unwrap_or(DEFAULT_RESPONSE),
            back_link: self.back_link.unwrap_or(false),
            extra: self.extra.clone(),
        }
    }
}

impl Debug for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("response", &self.response)
            .field("back_link", &self.back_link)
            .field("handler", &self.handler.as_ref().map(|_| "custom"))
            .field("extra", &self.extra)
            .finish()
    }
}

/// Normalized options, what a handler receives.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Settings {
    /// Status code.
    pub response: u16,

    /// Whether to append a back link.
    pub back_link: bool,

    /// Keys passed through from `Options::extra`.
    pub extra: HashMap<String, String>,
}

impl Settings {
    /// Get an extra key.
    #[inline]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Options::default().settings()
    }
}

#[cfg(test)]
mod tests {
    use super::{Args, Options, Settings, Title};

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(500, settings.response);
        assert!(!settings.back_link);
        assert!(settings.extra.is_empty());
        assert_eq!(Title::Text("Error".to_string()), Title::default());
        assert!(matches!(Args::default(), Args::Options(options) if options.response.is_none()));
    }

    #[test]
    fn supplied_keys_win() {
        let settings = Options::new()
            .response(404)
            .back_link(true)
            .extra("code", "gone")
            .settings();
        assert_eq!(404, settings.response);
        assert!(settings.back_link);
        assert_eq!(Some("gone"), settings.extra("code"));
        assert_eq!(None, settings.extra("missing"));
    }

    #[test]
    fn shorthands() {
        assert_eq!(Title::Response(404), Title::from(404u16));
        assert_eq!(Title::Text("Oops".to_string()), Title::from("Oops"));
        assert!(matches!(Args::from(410u16), Args::Response(410)));
        assert!(matches!(Args::from(()), Args::Options(_)));
        assert_eq!(Title::Response(404), Title::from(404));
        assert!(matches!(Args::from(-1), Args::Response(0)));
        assert!(matches!(Args::from(70_000), Args::Response(0)));
    }
}
