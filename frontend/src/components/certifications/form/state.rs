//! Local state of the edit form. Closing the form drops it; an upload or save
//! still in flight completes against the service but its result is ignored.

use common::model::account::Account;
use common::ui::form::EditForm;
use common::ui::suggestions::TypeSuggestions;

pub struct CertificationForm {
    /// Draft of the record plus create/edit mode.
    pub form: EditForm,

    /// Employees offered by the picker.
    pub accounts: Vec<Account>,

    /// Known categories and dropdown visibility for the type field.
    pub suggestions: TypeSuggestions,

    pub uploading: bool,
    pub saving: bool,
    pub loaded: bool,
}

impl CertificationForm {
    pub fn new(form: EditForm) -> Self {
        Self {
            form,
            accounts: Vec::new(),
            suggestions: TypeSuggestions::default(),
            uploading: false,
            saving: false,
            loaded: false,
        }
    }
}
