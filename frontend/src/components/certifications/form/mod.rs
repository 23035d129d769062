//! Single-record edit form.
//!
//! On first render it loads the employee list and the known categories. The file
//! picker uploads as soon as a file is chosen and keeps only the returned id in
//! the draft. Submitting checks that an employee is selected, then creates or
//! updates depending on how the form was opened.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::ui::form::EditForm;

use crate::api;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CertificationFormProps;
pub use state::CertificationForm;

impl Component for CertificationForm {
    type Message = Msg;
    type Properties = CertificationFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let form = match &ctx.props().record {
            Some(record) => EditForm::edit(record),
            None => EditForm::create(),
        };
        CertificationForm::new(form)
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
                match api::list_accounts().await {
                    Ok(accounts) => link.send_message(Msg::AccountsLoaded(accounts)),
                    Err(e) => link.send_message(Msg::LoadFailed(e)),
                }
            });

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_types().await {
                    Ok(types) => link.send_message(Msg::TypesLoaded(types)),
                    Err(e) => link.send_message(Msg::LoadFailed(e)),
                }
            });
        }
    }
}
