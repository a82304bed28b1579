fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("Starting todolist frontend");

    dioxus::launch(todolist::App);
}
