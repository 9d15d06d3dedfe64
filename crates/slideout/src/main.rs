use relm4::prelude::*;
use slideout::config;
use slideout::gui::app::AppModel;
use slideout::sys::runtime;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx);

    let app = RelmApp::new("org.stagger.slideout");
    app.run::<AppModel>((config, rx));
}
