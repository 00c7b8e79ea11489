use crate::{Context, Message, Settings, StatusLine};
use askama::Template;
use http::header::CONTENT_TYPE;
use http::HeaderValue;
use lazy_static::lazy_static;
use log::{debug, error};

// Static header value.
lazy_static! {
    static ref TEXT_HTML: HeaderValue = HeaderValue::from_static("text/html; charset=utf-8");
}

/// A strategy rendering an error page into the context.
///
/// It receives the normalized message, title and settings.
/// Any `Fn(&mut Context, Message, String, Settings)` is a handler.
///
/// ### Example
/// ```rust
/// use halt::{die, App, Context, Message, Options, Result, Settings};
///
/// fn plain(ctx: &mut Context, message: Message, title: String, settings: Settings) {
///     if let Message::Text(text) = message {
///         ctx.resp.write(format!("{} ({}): {}", title, settings.response, text));
///     }
/// }
///
/// async fn end(ctx: &mut Context) -> Result {
///     die!(ctx, "gone", "Sorry", Options::new().handler(plain));
/// }
///
/// // or for the whole app
/// let app = App::new(end).handler(plain);
/// ```
pub trait Handler: 'static + Send + Sync {
    /// Render the page.
    fn handle(&self, ctx: &mut Context, message: Message, title: String, settings: Settings);
}

impl<F> Handler for F
where
    F: 'static + Send + Sync + Fn(&mut Context, Message, String, Settings),
{
    #[inline]
    fn handle(&self, ctx: &mut Context, message: Message, title: String, settings: Settings) {
        (self)(ctx, message, title, settings)
    }
}

#[derive(Template)]
#[template(path = "die.html")]
struct Page<'a> {
    title: &'a str,
    text: Option<&'a str>,
    markup: Option<&'a str>,
    back_link: bool,
}

/// Set the status line for `code`, best effort.
///
/// Nothing is set if `code` has no reason phrase,
/// and a failure to set it is logged and ignored.
pub fn status_header(ctx: &mut Context, code: u16) {
    let line = match StatusLine::resolve(code, ctx.req.protocol()) {
        Some(line) => line,
        None => {
            debug!("no reason phrase for status {}, status line skipped", code);
            return;
        }
    };
    if let Err(err) = ctx.resp.set_status_line(line) {
        debug!("status line `{}` not sent: {}", line, err);
    }
}

/// The built-in handler.
///
/// It sets the status line and `Content-Type: text/html; charset=utf-8`,
/// then writes a self-contained html page to the response body.
/// Text is wrapped in a paragraph, markup is written as it is.
/// Neither the title nor the message is escaped.
pub fn default_handler(ctx: &mut Context, message: Message, title: String, settings: Settings) {
    status_header(ctx, settings.response);
    if let Err(err) = ctx.resp.insert_header(CONTENT_TYPE, TEXT_HTML.clone()) {
        debug!("content type not sent: {}", err);
    }

    let summary;
    let (text, markup) = match &message {
        Message::Text(text) => (Some(text.as_str()), None),
        Message::Markup(html) => (None, Some(html.as_str())),
        Message::Error(err) => {
            summary = err.summary().unwrap_or_default();
            (Some(summary.as_str()), None)
        }
    };
    let page = Page {
        title: &title,
        text,
        markup,
        back_link: settings.back_link,
    };
    match page.render() {
        Ok(html) => {
            ctx.resp.write(html);
        }
        Err(err) => error!("fail to render error page: {}", err),
    }
}
