use smart::app::{self, routes::Route, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let route = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok())
        .map(|path| match Route::parse(&path) {
            Ok(route) => route,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        });

    app::run(Flags { lang, route })
}
