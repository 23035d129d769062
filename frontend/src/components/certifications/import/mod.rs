//! Bulk import wizard.
//!
//! Step one offers the pre-filled template and takes the completed file; the
//! service parses it without storing anything. Step two previews every row with
//! its validity and, once confirmed, commits them. The wizard closes after a
//! fully successful commit.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ImportWizardProps;
pub use state::ImportWizardView;

impl Component for ImportWizardView {
    type Message = Msg;
    type Properties = ImportWizardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ImportWizardView::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
