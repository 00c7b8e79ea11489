//! ### Introduction
//!
//! Halt renders a minimal html error page, then stops the request.
//!
//! An endpoint calls [`die!`] with a message, an optional title and optional options.
//! The page is written into the response at once and the endpoint returns
//! `Err(Error::Halt(..))`, so nothing after `die!` runs.
//! The [`App`] recognizes the halt and sends the response as it is.
//!
//! ```rust,no_run
//! use halt::{die, App, Context, Options, Result};
//! use log::info;
//!
//! async fn end(ctx: &mut Context) -> Result {
//!     match ctx.uri().path() {
//!         "/" => {
//!             ctx.resp.write("Hello, World");
//!             Ok(())
//!         }
//!         "/admin" => die!(ctx, "You are not allowed here.", 403),
//!         "/form" => die!(
//!             ctx,
//!             "The form expired, please submit it again.",
//!             "Expired",
//!             Options::new().response(410).back_link(true)
//!         ),
//!         _ => die!(ctx, "There is nothing here.", "Not Found", 404),
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let (addr, server) = App::new(end).bind("127.0.0.1:8000")?;
//!     info!("Server is listening on {}", addr);
//!     server.await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Shorthands
//!
//! An integer title or integer options is the response code:
//! `die!(ctx, msg, 404)`, `die!(ctx, msg, "Error", 404)` and
//! `die!(ctx, msg, "Error", Options::new().response(404))` render the same page.
//! Without a code the page is a `500 Internal Server Error`.
//!
//! ### Handlers
//!
//! A page is rendered by a [`Handler`]. The default one sets the status line and
//! `Content-Type: text/html; charset=utf-8` then writes the page;
//! replace it for a whole app by [`App::handler`] or for one call by [`Options::handler`].
//!
//! ### Thrown status
//!
//! A status thrown by [`throw!`] or by `?` on any error reaches the app,
//! which renders it through the same handler.
//! Messages of errors converted by `?` are never exposed.

#![warn(missing_docs)]

mod app;
mod context;
mod err;
mod handler;
mod message;
mod options;
mod request;
mod respond;
mod response;
mod status;

#[doc(inline)]
pub use app::{App, Endpoint, HttpService};
#[doc(inline)]
pub use context::Context;
#[doc(inline)]
pub use err::{Error, Halt, Result, Status};
#[doc(inline)]
pub use handler::{default_handler, status_header, Handler};
pub use http;
#[doc(inline)]
pub use message::{Describe, Markup, Message};
#[doc(inline)]
pub use options::{Args, Options, Settings, Title, DEFAULT_RESPONSE, DEFAULT_TITLE};
#[doc(inline)]
pub use request::Request;
#[doc(inline)]
pub use respond::respond;
#[doc(inline)]
pub use response::{HeadersSent, Response};
#[doc(inline)]
pub use status::{protocol, reason, StatusLine};
