use common::model::certification::Certification;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CertificationFormProps {
    /// Record being edited; `None` opens an empty form for a new record.
    #[prop_or_default]
    pub record: Option<Certification>,

    /// Receives the stored record after a successful create or update.
    pub on_saved: Callback<Certification>,

    pub on_cancel: Callback<()>,
}
