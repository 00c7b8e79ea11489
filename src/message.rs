use crate::Status;
use std::fmt::{self, Debug, Formatter};

/// An error-like value that can describe itself on an error page.
///
/// ### Example
/// ```rust
/// use halt::{Describe, Message};
///
/// struct Expired;
///
/// impl Describe for Expired {
///     fn summary(&self) -> Option<String> {
///         Some("The link you followed has expired.".to_string())
///     }
///
///     fn title(&self) -> Option<String> {
///         Some("Expired".to_string())
///     }
/// }
///
/// let message = Message::error(Expired);
/// assert_eq!(Some("Expired".to_string()), message.title());
/// ```
pub trait Describe: 'static + Send + Sync {
    /// Human readable summary, shown as the page content.
    fn summary(&self) -> Option<String>;

    /// Title to use when the caller kept the default one.
    fn title(&self) -> Option<String> {
        None
    }
}

impl Describe for Status {
    #[inline]
    fn summary(&self) -> Option<String> {
        if self.expose && !self.message.is_empty() {
            Some(self.message.clone())
        } else {
            None
        }
    }
}

/// Pre-rendered html, written to the page as it is.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Markup(pub String);

/// Content of an error page.
pub enum Message {
    /// Text wrapped in a paragraph, embedded tags are kept.
    Text(String),

    /// Pre-rendered html.
    Markup(String),

    /// A structured error.
    Error(Box<dyn Describe>),
}

impl Message {
    /// Construct a message from a structured error.
    #[inline]
    pub fn error(err: impl Describe) -> Self {
        Message::Error(Box::new(err))
    }

    /// Title override offered by a structured error.
    #[inline]
    pub fn title(&self) -> Option<String> {
        match self {
            Message::Error(err) => err.title(),
            _ => None,
        }
    }
}

impl Default for Message {
    #[inline]
    fn default() -> Self {
        Message::Text(String::new())
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Message::Markup(html) => f.debug_tuple("Markup").field(html).finish(),
            Message::Error(err) => f
                .debug_struct("Error")
                .field("summary", &err.summary())
                .field("title", &err.title())
                .finish(),
        }
    }
}

impl From<&str> for Message {
    #[inline]
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    #[inline]
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<Markup> for Message {
    #[inline]
    fn from(Markup(html): Markup) -> Self {
        Message::Markup(html)
    }
}

impl From<Status> for Message {
    #[inline]
    fn from(status: Status) -> Self {
        Message::error(status)
    }
}

impl From<Box<dyn Describe>> for Message {
    #[inline]
    fn from(err: Box<dyn Describe>) -> Self {
        Message::Error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{Describe, Markup, Message};
    use crate::Status;
    use http::StatusCode;

    #[test]
    fn shapes() {
        assert!(matches!(Message::from("hello"), Message::Text(text) if text == "hello"));
        assert!(matches!(
            Message::from(Markup("<b>hi</b>".to_string())),
            Message::Markup(html) if html == "<b>hi</b>"
        ));
        assert!(matches!(Message::default(), Message::Text(text) if text.is_empty()));
    }

    #[test]
    fn status_summary_respects_expose() {
        let exposed = Status::new(StatusCode::NOT_FOUND, "no such post", true);
        assert_eq!(Some("no such post".to_string()), exposed.summary());

        let hidden = Status::new(StatusCode::INTERNAL_SERVER_ERROR, "db password", false);
        assert_eq!(None, hidden.summary());
        assert_eq!(None, Message::from(hidden).title());
    }
}
