use http::{StatusCode, Version};
use std::fmt::{self, Display, Formatter};

/// Protocol tokens a status line may carry verbatim.
const PROTOCOLS: [&str; 3] = ["HTTP/1.1", "HTTP/2", "HTTP/2.0"];

/// Protocol token used when the declared one is missing or unknown.
const FALLBACK_PROTOCOL: &str = "HTTP/1.0";

/// Get the reason phrase of a status code.
///
/// Returns `None` for any code not listed in the table,
/// including codes `http::StatusCode` would accept.
///
/// ### Example
/// ```rust
/// use halt::reason;
///
/// assert_eq!(Some("Not Found"), reason(404));
/// assert_eq!(Some("I'm a teapot"), reason(418));
/// assert_eq!(None, reason(299));
/// ```
pub fn reason(code: u16) -> Option<&'static str> {
    let phrase = match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",

        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        226 => "IM Used",

        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        306 => "Reserved",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",

        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",

        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        510 => "Not Extended",
        511 => "Network Authentication Required",

        _ => return None,
    };
    Some(phrase)
}

/// Pick the protocol token of a status line.
///
/// The declared protocol is kept only if it is one of
/// `HTTP/1.1`, `HTTP/2` or `HTTP/2.0`; anything else becomes `HTTP/1.0`.
pub fn protocol(declared: &str) -> &'static str {
    PROTOCOLS
        .iter()
        .find(|token| **token == declared)
        .copied()
        .unwrap_or(FALLBACK_PROTOCOL)
}

/// A resolved status line, `<protocol> <code> <reason>`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StatusLine {
    /// Protocol token, one of the allowed ones or `HTTP/1.0`.
    pub protocol: &'static str,

    /// Status code.
    pub code: StatusCode,

    /// Reason phrase from the table.
    pub reason: &'static str,
}

impl StatusLine {
    /// Resolve a status line for `code` under the declared protocol.
    ///
    /// Returns `None` if `code` has no reason phrase.
    pub fn resolve(code: u16, declared: &str) -> Option<Self> {
        let reason = reason(code)?;
        // every code in the table is within 100..=599.
        let code = StatusCode::from_u16(code).ok()?;
        Some(Self {
            protocol: protocol(declared),
            code,
            reason,
        })
    }

    /// The http version matching the protocol token.
    pub fn version(&self) -> Version {
        match self.protocol {
            "HTTP/1.1" => Version::HTTP_11,
            "HTTP/2" | "HTTP/2.0" => Version::HTTP_2,
            _ => Version::HTTP_10,
        }
    }
}

impl Display for StatusLine {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.protocol, self.code.as_u16(), self.reason)
    }
}
