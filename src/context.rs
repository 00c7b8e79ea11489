use crate::{default_handler, Handler, Request, Response};
use http::{Method, Uri, Version};
use std::sync::Arc;

/// A structure to share request, response and the app's page handler.
///
/// ### Request and Response
///
/// You can read request and write response by `ctx.req` and `ctx.resp`:
///
/// ```rust
/// use halt::{Context, Result};
/// use halt::http::StatusCode;
///
/// async fn end(ctx: &mut Context) -> Result {
///     ctx.resp.status = StatusCode::ACCEPTED;
///     ctx.resp.write("queued");
///     Ok(())
/// }
/// ```
pub struct Context {
    /// The request, to read http method, uri, version, headers, etc.
    pub req: Request,

    /// The response, to set http status, version, headers, body, etc.
    pub resp: Response,

    handler: Arc<dyn Handler>,
}

impl Context {
    /// Construct a context rendering pages by `handler` unless a call overrides it.
    #[inline]
    pub fn new(req: Request, handler: Arc<dyn Handler>) -> Self {
        Self {
            req,
            resp: Response::new(),
            handler,
        }
    }

    /// Construct a context rendering pages by [`default_handler`].
    ///
    /// Useful to drive [`respond`](crate::respond) outside of an [`App`](crate::App).
    #[inline]
    pub fn with_default_handler(req: Request) -> Self {
        Self::new(req, Arc::new(default_handler))
    }

    /// The page handler configured by the app.
    #[inline]
    pub fn handler(&self) -> Arc<dyn Handler> {
        self.handler.clone()
    }

    /// Get request URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.req.uri
    }

    /// Get request method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.req.method
    }

    /// Get request version.
    #[inline]
    pub fn version(&self) -> Version {
        self.req.version
    }
}

#[cfg(test)]
mod tests {
    use super::Context;
    use crate::{Message, Request, Settings};
    use http::StatusCode;
    use std::sync::Arc;

    #[test]
    fn carries_handler() {
        fn mark(ctx: &mut Context, _: Message, _: String, _: Settings) {
            ctx.resp.write("marked");
        }
        let mut ctx = Context::new(Request::default(), Arc::new(mark));
        let handler = ctx.handler();
        handler.handle(&mut ctx, Message::default(), String::new(), Settings::default());
        assert_eq!("marked", ctx.resp.text());
        assert_eq!("/", ctx.uri().path());
    }

    #[test]
    fn default_handler_renders_html() {
        let mut ctx = Context::with_default_handler(Request::default());
        let handler = ctx.handler();
        handler.handle(
            &mut ctx,
            Message::from("plain"),
            "Error".to_string(),
            Settings::default(),
        );
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, ctx.resp.status);
        assert!(ctx.resp.text().contains("<p>plain</p>"));
    }
}
