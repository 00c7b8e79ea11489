use std::fmt::{Display, Formatter};
use std::result::Result as StdResult;

use http::StatusCode;

/// Type alias for `StdResult`.
pub type Result<R = ()> = StdResult<R, Error>;

/// Construct a `Status`.
///
/// - `status!(status_code)` will be expanded to `status!(status_code, "")`
/// - `status!(status_code, message)` will be expanded to `status!(status_code, message, true)`
/// - `status!(status_code, message, expose)` will be expanded to `Status::new(status_code, message, expose)`
#[macro_export]
macro_rules! status {
    ($status_code:expr) => {
        $crate::status!($status_code, "")
    };
    ($status_code:expr, $message:expr) => {
        $crate::status!($status_code, $message, true)
    };
    ($status_code:expr, $message:expr, $expose:expr) => {
        $crate::Status::new($status_code, $message, $expose)
    };
}

/// Throw an `Err(Error::Status(..))`.
///
/// The app renders a thrown status as an error page.
///
/// ### Example
/// ```rust
/// use halt::{Context, Result, throw};
/// use halt::http::StatusCode;
///
/// async fn end(ctx: &mut Context) -> Result {
///     throw!(StatusCode::IM_A_TEAPOT, "I'm a teapot!"); // throw
///     unreachable!()
/// }
/// ```
#[macro_export]
macro_rules! throw {
    ($status_code:expr) => {
        return core::result::Result::Err($crate::Error::from($crate::status!($status_code)))
    };
    ($status_code:expr, $message:expr) => {
        return core::result::Result::Err($crate::Error::from($crate::status!(
            $status_code,
            $message
        )))
    };
    ($status_code:expr, $message:expr, $expose:expr) => {
        return core::result::Result::Err($crate::Error::from($crate::status!(
            $status_code,
            $message,
            $expose
        )))
    };
}

/// Render an error page into the context, then return `Err(Error::Halt(..))`.
///
/// - `die!(ctx, message)` will be expanded to `die!(ctx, message, Title::default())`
/// - `die!(ctx, message, title)` will be expanded to `die!(ctx, message, title, Args::default())`
/// - `die!(ctx, message, title, args)` will be expanded to `return Err(respond(ctx, message, title, args).into())`
///
/// Nothing after `die!` runs.
///
/// ### Example
/// ```rust
/// use halt::{die, Context, Options, Result};
///
/// async fn end(ctx: &mut Context) -> Result {
///     die!(ctx, "You are not allowed here.", 403);
/// }
///
/// async fn back(ctx: &mut Context) -> Result {
///     die!(ctx, "Try again.", "Oops", Options::new().back_link(true));
/// }
/// ```
#[macro_export]
macro_rules! die {
    ($ctx:expr, $message:expr) => {
        $crate::die!($ctx, $message, $crate::Title::default())
    };
    ($ctx:expr, $message:expr, $title:expr) => {
        $crate::die!($ctx, $message, $title, $crate::Args::default())
    };
    ($ctx:expr, $message:expr, $title:expr, $args:expr) => {
        return core::result::Result::Err($crate::Error::from($crate::respond(
            $ctx, $message, $title, $args,
        )))
    };
}

/// The signal that a response is complete and no more handler code may run.
///
/// Only [`respond`](crate::respond) produces it.
/// The app dispatcher recognizes it and sends the response as it is.
#[must_use = "a halted response must be propagated to the dispatcher"]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Halt {
    response: u16,
}

impl Halt {
    #[inline]
    pub(crate) fn new(response: u16) -> Self {
        Self { response }
    }

    /// The status code the error page was rendered with.
    #[inline]
    pub fn response(&self) -> u16 {
        self.response
    }
}

impl Display for Halt {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        write!(f, "halted with response {}", self.response)
    }
}

/// An ordinary failure, rendered by the app if nothing catches it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Status {
    /// StatusCode of the error page.
    pub status_code: StatusCode,

    /// Message will be shown on the error page if self.expose is true.
    pub message: String,

    /// if message exposed.
    pub expose: bool,
}

impl Status {
    /// Construct a status.
    #[inline]
    pub fn new(status_code: StatusCode, message: impl ToString, expose: bool) -> Self {
        Self {
            status_code,
            message: message.to_string(),
            expose,
        }
    }
}

impl Display for Status {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        f.write_str(&format!("{}: {}", self.status_code, self.message))
    }
}

/// The error type of endpoints.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The response is written, stop.
    Halt(Halt),

    /// A failure the app should render.
    Status(Status),
}

impl Error {
    /// Whether this error ends the request with an already written response.
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, Error::Halt(_))
    }
}

impl From<Halt> for Error {
    #[inline]
    fn from(halt: Halt) -> Self {
        Error::Halt(halt)
    }
}

impl From<Status> for Error {
    #[inline]
    fn from(status: Status) -> Self {
        Error::Status(status)
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error,
{
    #[inline]
    fn from(err: E) -> Self {
        Error::Status(Status::new(StatusCode::INTERNAL_SERVER_ERROR, err, false))
    }
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> StdResult<(), std::fmt::Error> {
        match self {
            Error::Halt(halt) => Display::fmt(halt, f),
            Error::Status(status) => Display::fmt(status, f),
        }
    }
}
