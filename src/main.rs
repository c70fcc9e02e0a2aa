use cappy_site::logging::{self, LogComponent};
use cappy_site::{App, SiteConfig};
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::load();
    logging::init(config.log_level);
    logging::info(LogComponent::App, "mounting site");

    mount_to_body(move || view! { <App config=config/> })
}
