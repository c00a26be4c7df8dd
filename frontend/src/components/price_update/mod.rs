//! Price update page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `PriceUpdateComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the catalog client configuration from the host,
//!   keeping the built-in defaults when it is not available.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

use crate::api;
pub use messages::Msg;
pub use state::PriceUpdateComponent;

impl Component for PriceUpdateComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        PriceUpdateComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::load_client_config().await {
                    Ok(config) => link.send_message(Msg::SetConfig(config)),
                    Err(err) => log::warn!("using default client config: {}", err),
                }
            });
        }
    }
}
