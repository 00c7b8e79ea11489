use crate::StatusLine;
use bytes::BytesMut;
use http::header::HeaderName;
use http::{HeaderMap, HeaderValue, StatusCode, Version};
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// The head of a response was already sent, it cannot change anymore.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HeadersSent;

impl Display for HeadersSent {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("headers already sent")
    }
}

impl std::error::Error for HeadersSent {}

/// Http response type of halt.
#[derive(Debug)]
pub struct Response {
    /// Status code.
    pub status: StatusCode,

    /// Version of HTTP protocol.
    pub version: Version,

    /// Raw header map.
    pub headers: HeaderMap<HeaderValue>,

    status_line: Option<StatusLine>,
    body: BytesMut,
    committed: bool,
}

impl Response {
    /// Construct an empty `200 OK` response.
    #[inline]
    pub fn new() -> Self {
        Self {
            status: StatusCode::default(),
            version: Version::default(),
            headers: HeaderMap::default(),
            status_line: None,
            body: BytesMut::new(),
            committed: false,
        }
    }

    /// Set status and version from a status line.
    pub fn set_status_line(&mut self, line: StatusLine) -> Result<(), HeadersSent> {
        if self.committed {
            return Err(HeadersSent);
        }
        self.status = line.code;
        self.version = line.version();
        self.status_line = Some(line);
        Ok(())
    }

    /// The last status line set, if any.
    #[inline]
    pub fn status_line(&self) -> Option<StatusLine> {
        self.status_line
    }

    /// Insert a header, replacing the old value.
    pub fn insert_header(
        &mut self,
        name: HeaderName,
        value: HeaderValue,
    ) -> Result<Option<HeaderValue>, HeadersSent> {
        if self.committed {
            return Err(HeadersSent);
        }
        Ok(self.headers.insert(name, value))
    }

    /// Mark the head as sent.
    ///
    /// A host that flushes the head before the endpoint finishes, e.g. to stream
    /// the body, calls this once the head is out. Later calls to `set_status_line`
    /// and `insert_header` fail with `HeadersSent`, so an error page rendered after
    /// that keeps the sent head and only appends to the body.
    /// `HttpService` sends the head after the endpoint returns and never commits.
    #[inline]
    pub fn commit(&mut self) {
        self.committed = true;
    }

    /// Whether the head was sent.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Append bytes to body.
    #[inline]
    pub fn write(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.body.extend_from_slice(data.as_ref());
        self
    }

    /// Body written so far.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body written so far, as text.
    #[inline]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    fn into_resp(self) -> http::Response<hyper::Body> {
        let (mut parts, _) = http::Response::new(()).into_parts();
        let Response {
            status,
            version,
            headers,
            body,
            ..
        } = self;
        parts.status = status;
        parts.version = version;
        parts.headers = headers;
        http::Response::from_parts(parts, body.freeze().into())
    }
}

impl From<Response> for http::Response<hyper::Body> {
    #[inline]
    fn from(value: Response) -> Self {
        value.into_resp()
    }
}

impl Default for Response {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
