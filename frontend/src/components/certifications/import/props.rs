use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ImportWizardProps {
    /// Called once the wizard closes; `true` when at least one record was created
    /// so the list knows to reload.
    pub on_finished: Callback<bool>,
}
