use http::{HeaderMap, HeaderValue, Method, Uri, Version};

/// Http request type of halt.
///
/// Only the head is kept; error pages never read the body.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request's method
    pub method: Method,

    /// The request's URI
    pub uri: Uri,

    /// The request's version
    pub version: Version,

    /// The request's headers
    pub headers: HeaderMap<HeaderValue>,
}

impl Request {
    /// The protocol the request declared, like `HTTP/1.1`.
    pub fn protocol(&self) -> &'static str {
        match self.version {
            Version::HTTP_09 => "HTTP/0.9",
            Version::HTTP_10 => "HTTP/1.0",
            Version::HTTP_11 => "HTTP/1.1",
            Version::HTTP_2 => "HTTP/2.0",
            Version::HTTP_3 => "HTTP/3.0",
            _ => "",
        }
    }
}

impl<B> From<http::Request<B>> for Request {
    #[inline]
    fn from(req: http::Request<B>) -> Self {
        let (parts, _) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            version: parts.version,
            headers: parts.headers,
        }
    }
}

impl Default for Request {
    #[inline]
    fn default() -> Self {
        http::Request::new(()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::Request;
    use http::{Method, Version};

    #[test]
    fn protocol() {
        let mut req = Request::default();
        assert_eq!(Method::GET, req.method);
        assert_eq!("HTTP/1.1", req.protocol());
        req.version = Version::HTTP_10;
        assert_eq!("HTTP/1.0", req.protocol());
        req.version = Version::HTTP_2;
        assert_eq!("HTTP/2.0", req.protocol());
        req.version = Version::HTTP_3;
        assert_eq!("HTTP/3.0", req.protocol());
    }

    #[test]
    fn from_http() -> Result<(), http::Error> {
        let req: Request = http::Request::post("/posts/1")
            .version(Version::HTTP_2)
            .header("x-trace", "abc")
            .body("ignored")?
            .into();
        assert_eq!(Method::POST, req.method);
        assert_eq!("/posts/1", req.uri.path());
        assert_eq!("HTTP/2.0", req.protocol());
        assert_eq!("abc", req.headers["x-trace"]);
        Ok(())
    }
}
