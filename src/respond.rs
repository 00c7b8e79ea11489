use crate::options::DEFAULT_TITLE;
use crate::{Args, Context, Halt, Message, Options, Title};
use log::debug;

/// Render an error page into the context and halt.
///
/// `title` and `args` both accept a status code as shorthand:
///
/// - an integer `args` becomes `Options::new().response(code)`;
/// - otherwise an integer `title` replaces the options with `Options::new().response(code)`
///   and the title falls back to `"Error"`.
///
/// The options are then merged over `{ response: 500, back_link: false }` and the page is
/// rendered by `Options::handler`, or by the context's handler if it is absent.
///
/// The returned `Halt` must reach the dispatcher, see [`die!`](crate::die).
///
/// ### Example
/// ```rust
/// use halt::{respond, Context, Request};
/// use halt::http::StatusCode;
///
/// let mut ctx = Context::with_default_handler(Request::default());
/// let halt = respond(&mut ctx, "No such post.", 404, ());
/// assert_eq!(404, halt.response());
/// assert_eq!(StatusCode::NOT_FOUND, ctx.resp.status);
/// assert!(ctx.resp.text().contains("<p>No such post.</p>"));
/// ```
pub fn respond(
    ctx: &mut Context,
    message: impl Into<Message>,
    title: impl Into<Title>,
    args: impl Into<Args>,
) -> Halt {
    let message = message.into();
    let (mut title, options) = normalize(title.into(), args.into());
    if title.is_empty() || title == DEFAULT_TITLE {
        if let Some(error_title) = message.title() {
            title = error_title;
        }
    }
    let handler = options.handler.clone().unwrap_or_else(|| ctx.handler());
    let settings = options.settings();
    let response = settings.response;
    debug!("halt {} {} with response {}", ctx.method(), ctx.uri(), response);
    handler.handle(ctx, message, title, settings);
    Halt::new(response)
}

fn normalize(title: Title, args: Args) -> (String, Options) {
    match (title, args) {
        (Title::Text(title), Args::Response(code)) => (title, Options::new().response(code)),
        (Title::Response(_), Args::Response(code)) => {
            (DEFAULT_TITLE.to_string(), Options::new().response(code))
        }
        (Title::Response(code), Args::Options(_)) => {
            (DEFAULT_TITLE.to_string(), Options::new().response(code))
        }
        (Title::Text(title), Args::Options(options)) => (title, options),
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, respond};
    use crate::{
        Args, Context, Describe, Markup, Message, Options, Request, Settings, Title,
    };
    use http::{StatusCode, Version};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(String, String, Settings)>>>;

    // A context whose handler records what it receives.
    fn recording() -> (Context, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let store = seen.clone();
        let handler = move |_ctx: &mut Context, message: Message, title: String, settings: Settings| {
            let text = match message {
                Message::Text(text) | Message::Markup(text) => text,
                Message::Error(err) => err.summary().unwrap_or_default(),
            };
            store.lock().unwrap().push((text, title, settings));
        };
        (Context::new(Request::default(), Arc::new(handler)), seen)
    }

    #[test]
    fn shorthands_agree() {
        let (mut ctx, seen) = recording();
        let _ = respond(&mut ctx, "gone", 404, ());
        let _ = respond(&mut ctx, "gone", "Error", 404);
        let _ = respond(&mut ctx, "gone", "Error", Options::new().response(404));
        let seen = seen.lock().unwrap();
        assert_eq!(3, seen.len());
        for (text, title, settings) in seen.iter() {
            assert_eq!("gone", text);
            assert_eq!("Error", title);
            assert_eq!(404, settings.response);
            assert!(!settings.back_link);
        }
    }

    #[test]
    fn defaults() {
        let (mut ctx, seen) = recording();
        let halt = respond(&mut ctx, "x", Title::default(), Args::default());
        assert_eq!(500, halt.response());
        let seen = seen.lock().unwrap();
        assert_eq!("Error", seen[0].1);
        assert_eq!(500, seen[0].2.response);
    }

    #[test]
    fn normalization_order() {
        // an integer args wins over an integer title
        let (title, options) = normalize(Title::Response(404), Args::Response(410));
        assert_eq!("Error", title);
        assert_eq!(Some(410), options.response);

        // an integer args keeps a text title
        let (title, options) = normalize(Title::from("Gone"), Args::Response(410));
        assert_eq!("Gone", title);
        assert_eq!(Some(410), options.response);

        // an integer title replaces the options
        let supplied = Options::new().response(503).back_link(true).extra("k", "v");
        let (title, options) = normalize(Title::Response(404), Args::Options(supplied));
        assert_eq!("Error", title);
        let settings = options.settings();
        assert_eq!(404, settings.response);
        assert!(!settings.back_link);
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn extra_keys_pass_through() {
        let (mut ctx, seen) = recording();
        let options = Options::new().back_link(true).extra("link_url", "/home");
        let _ = respond(&mut ctx, "x", "Oops", options);
        let seen = seen.lock().unwrap();
        assert_eq!("Oops", seen[0].1);
        assert!(seen[0].2.back_link);
        assert_eq!(Some("/home"), seen[0].2.extra("link_url"));
    }

    #[test]
    fn call_handler_beats_context_handler() {
        let (mut ctx, seen) = recording();
        fn plain(ctx: &mut Context, _: Message, title: String, settings: Settings) {
            ctx.resp.write(format!("{} {}", settings.response, title));
        }
        let _ = respond(&mut ctx, "x", "Oops", Options::new().response(403).handler(plain));
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!("403 Oops", ctx.resp.text());
    }

    struct Expired;

    impl Describe for Expired {
        fn summary(&self) -> Option<String> {
            Some("The link has expired.".to_string())
        }

        fn title(&self) -> Option<String> {
            Some("Expired".to_string())
        }
    }

    #[test]
    fn error_title_overrides_default_only() {
        let (mut ctx, seen) = recording();
        let _ = respond(&mut ctx, Message::error(Expired), Title::default(), 410);
        let _ = respond(&mut ctx, Message::error(Expired), "", 410);
        let _ = respond(&mut ctx, Message::error(Expired), "Custom", 410);
        let seen = seen.lock().unwrap();
        assert_eq!("The link has expired.", seen[0].0);
        assert_eq!("Expired", seen[0].1);
        assert_eq!("Expired", seen[1].1);
        assert_eq!("Custom", seen[2].1);
    }

    #[test]
    fn default_handler_end_to_end() {
        let mut req = Request::default();
        req.version = Version::HTTP_11;
        let mut ctx = Context::with_default_handler(req);
        let halt = respond(
            &mut ctx,
            Markup("<ul><li>one</li></ul>".to_string()),
            "List",
            Options::new().response(422).back_link(true),
        );
        assert_eq!(422, halt.response());
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, ctx.resp.status);
        let line = ctx.resp.status_line().expect("422 is listed");
        assert_eq!("HTTP/1.1 422 Unprocessable Entity", line.to_string());
        let body = ctx.resp.text();
        assert!(body.contains("<ul><li>one</li></ul>"));
        assert!(!body.contains("<p><ul>"));
        assert!(body.contains("history.back()"));
        assert!(body.contains("<title>List</title>"));
    }

    #[test]
    fn unknown_code_still_renders() {
        let mut ctx = Context::with_default_handler(Request::default());
        let halt = respond(&mut ctx, "odd", "Error", 299);
        assert_eq!(299, halt.response());
        assert!(ctx.resp.status_line().is_none());
        assert_eq!(StatusCode::OK, ctx.resp.status);
        assert!(ctx.resp.text().contains("<p>odd</p>"));
    }
}
