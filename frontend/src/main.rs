use crate::app::App;

mod api;
mod app;
mod components;
mod logger;

fn main() {
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
