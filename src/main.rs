use trailmap::ui::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_logger::init(wasm_logger::Config::default());
        dioxus::prelude::launch(App);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native runs are for tooling and tests; the app itself is a web
        // build (`dx serve --platform web`).
        tracing_subscriber::fmt::init();
        tracing::info!("trailmap is a web app; build it with `dx serve --platform web`");
        let _ = App;
    }
}
