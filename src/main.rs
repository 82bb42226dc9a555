mod app;
mod components;
mod config;
mod launcher;
mod message;
mod model;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
