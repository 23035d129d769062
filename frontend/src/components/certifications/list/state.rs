//! Runtime state of the certification list view.

use common::model::certification::Certification;
use common::ui::list::CertificationList;

/// Which modal sheet is open over the list, if any.
#[derive(Clone, PartialEq)]
pub enum Overlay {
    None,
    Form(Option<Certification>),
    Import,
}

pub struct CertificationListView {
    /// Records as last loaded, kept in sync locally after each action.
    pub list: CertificationList,

    /// Current search box content.
    pub query: String,

    pub loading: bool,

    /// Guard for the first-render load.
    pub loaded: bool,

    pub overlay: Overlay,

    /// Id of the record whose attachment is being uploaded.
    pub uploading: Option<String>,
}

impl CertificationListView {
    pub fn new() -> Self {
        Self {
            list: CertificationList::default(),
            query: String::new(),
            loading: false,
            loaded: false,
            overlay: Overlay::None,
            uploading: None,
        }
    }
}
