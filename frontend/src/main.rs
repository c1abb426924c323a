use crate::app::App;

mod app;
mod components;
mod console_logger;
mod requests;
mod tops_sheet;

fn main() {
    console_logger::init();
    yew::Renderer::<App>::new().render();
}
