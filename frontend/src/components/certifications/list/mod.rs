//! Certification list view.
//!
//! Loads every record on first render and filters them client-side. Per-row
//! actions (edit, delete, attach or view a file) update the local list from the
//! service's answer instead of reloading; only a finished import reloads.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CertificationListView;

impl Component for CertificationListView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CertificationListView::new()
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
            ctx.link().send_message(Msg::Load);
        }
    }
}
