mod app;
mod config;
mod estimator;
mod hooks;
mod lead;
mod sections;
mod utils;
mod voice;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting MVMNT site");

    yew::Renderer::<app::App>::new().render();
}
