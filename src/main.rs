use valentine_proposal::App;
use valentine_proposal::util::init_logging;

fn main() {
    init_logging(log::Level::Info);
    log::info!("Valentine proposal starting...");
    yew::Renderer::<App>::new().render();
}
