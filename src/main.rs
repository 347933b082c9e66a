mod app_router;
mod dom;
mod gallery;
mod gallery_core;
mod navbar;
mod yew_app;

fn main() {
    yew::Renderer::<yew_app::App>::new().render();
}
