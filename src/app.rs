use crate::{default_handler, respond, Context, Error, Handler, Request, Response, Result, Title};
use async_trait::async_trait;
use futures::future::{self, Ready};
use hyper::server::conn::{AddrIncoming, AddrStream};
use hyper::service::Service;
use hyper::{Body as HyperBody, Server};
use log::{debug, error, info};
use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::pin::Pin;
use std::result::Result as StdResult;
use std::sync::Arc;
use std::task::Poll;

/// Endpoint of an app.
///
/// Any `async fn(&mut Context) -> Result` is an endpoint.
#[async_trait]
pub trait Endpoint<'a>: 'static + Sync + Send {
    /// Call this endpoint.
    async fn call(&'a self, ctx: &'a mut Context) -> Result;
}

#[async_trait]
impl<'a, T, F> Endpoint<'a> for T
where
    T: 'static + Sync + Send + Fn(&'a mut Context) -> F,
    F: 'a + Future<Output = Result> + Send,
{
    #[inline]
    async fn call(&'a self, ctx: &'a mut Context) -> Result {
        (self)(ctx).await
    }
}

/// The Application of halt.
///
/// It runs the endpoint for every request and stops at the first `Err`.
/// An `Error::Halt` means the response is already written, it is sent as it is.
/// An `Error::Status` is rendered as an error page by the app's handler.
///
/// ### Example
/// ```rust,no_run
/// use halt::{die, App, Context, Result};
/// use log::info;
///
/// async fn end(ctx: &mut Context) -> Result {
///     if ctx.uri().path() != "/" {
///         die!(ctx, "There is nothing here.", 404);
///     }
///     ctx.resp.write("Hello, World");
///     Ok(())
/// }
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     let (addr, server) = App::new(end).bind("127.0.0.1:8000")?;
///     info!("Server is listening on {}", addr);
///     server.await.map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
/// }
/// ```
pub struct App {
    endpoint: Arc<dyn for<'a> Endpoint<'a>>,
    handler: Arc<dyn Handler>,
}

/// An implementation of hyper HttpService.
pub struct HttpService {
    endpoint: Arc<dyn for<'a> Endpoint<'a>>,
    handler: Arc<dyn Handler>,
    remote_addr: SocketAddr,
}

impl App {
    /// Construct an application rendering pages by the default handler.
    pub fn new(endpoint: impl for<'a> Endpoint<'a>) -> Self {
        Self {
            endpoint: Arc::new(endpoint),
            handler: Arc::new(default_handler),
        }
    }

    /// Use `handler` for every page whose options don't name one.
    pub fn handler(mut self, handler: impl Handler) -> Self {
        self.handler = Arc::new(handler);
        self
    }

    /// Construct a hyper server listening on `addr`.
    pub fn bind(
        self,
        addr: impl ToSocketAddrs,
    ) -> io::Result<(SocketAddr, Server<AddrIncoming, Self>)> {
        let addr = addr.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no socket address to bind")
        })?;
        let incoming = AddrIncoming::bind(&addr)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        let local_addr = incoming.local_addr();
        Ok((local_addr, Server::builder(incoming).serve(self)))
    }

    /// Construct a hyper server listening on a random local port.
    pub fn run(self) -> io::Result<(SocketAddr, Server<AddrIncoming, Self>)> {
        self.bind("127.0.0.1:0")
    }

    /// Make a http service for a peer.
    pub fn http_service(&self, remote_addr: SocketAddr) -> HttpService {
        HttpService {
            endpoint: self.endpoint.clone(),
            handler: self.handler.clone(),
            remote_addr,
        }
    }
}

macro_rules! impl_poll_ready {
    () => {
        #[inline]
        fn poll_ready(
            &mut self,
            _cx: &mut std::task::Context<'_>,
        ) -> Poll<StdResult<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
    };
}

impl Service<&AddrStream> for App {
    type Response = HttpService;
    type Error = io::Error;
    type Future = Ready<io::Result<HttpService>>;
    impl_poll_ready!();

    #[inline]
    fn call(&mut self, stream: &AddrStream) -> Self::Future {
        future::ok(self.http_service(stream.remote_addr()))
    }
}

type HttpFuture = Pin<
    Box<dyn 'static + Future<Output = StdResult<http::Response<HyperBody>, Infallible>> + Send>,
>;

impl Service<http::Request<HyperBody>> for HttpService {
    type Response = http::Response<HyperBody>;
    type Error = Infallible;
    type Future = HttpFuture;
    impl_poll_ready!();

    #[inline]
    fn call(&mut self, req: http::Request<HyperBody>) -> Self::Future {
        let service = self.clone();
        Box::pin(async move {
            let resp: http::Response<HyperBody> = service.serve(req.into()).await.into();
            Ok::<_, Infallible>(resp)
        })
    }
}

impl HttpService {
    /// The peer this service serves.
    #[inline]
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    /// Receive a request then return a response.
    /// The entry point of http service.
    pub async fn serve(&self, req: Request) -> Response {
        let mut ctx = Context::new(req, self.handler.clone());
        match self.endpoint.call(&mut ctx).await {
            Ok(()) => (),
            Err(Error::Halt(halt)) => {
                debug!("{} {} halted: {}", ctx.method(), ctx.uri(), halt)
            }
            Err(Error::Status(status)) => {
                if status.status_code.is_server_error() {
                    error!("{} {} - {}", ctx.method(), ctx.uri(), status);
                } else {
                    info!("{} {} - {}", ctx.method(), ctx.uri(), status);
                }
                let code = status.status_code.as_u16();
                let halt = respond(&mut ctx, status, Title::default(), code);
                debug!("{} {} halted: {}", ctx.method(), ctx.uri(), halt);
            }
        }
        ctx.resp
    }
}

impl Clone for HttpService {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            handler: self.handler.clone(),
            remote_addr: self.remote_addr,
        }
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            handler: self.handler.clone(),
        }
    }
}
