use common::ui::wizard::ImportWizard;

pub struct ImportWizardView {
    pub wizard: ImportWizard,

    /// A template download, parse or commit request is in flight.
    pub busy: bool,

    /// Set once any commit created records, even if it stopped part-way.
    pub created_any: bool,
}

impl ImportWizardView {
    pub fn new() -> Self {
        Self {
            wizard: ImportWizard::new(),
            busy: false,
            created_any: false,
        }
    }
}
