use common::model::certification::Certification;

pub enum Msg {
    Load,
    Loaded(Vec<Certification>),
    LoadFailed(String),
    SetQuery(String),
    OpenCreate,
    OpenEdit(Certification),
    OpenImport,
    CloseOverlay,
    Saved(Certification),
    ImportFinished { created_any: bool },
    Delete(String),
    Deleted(String),
    AttachFile { id: String, file: web_sys::File },
    Attached(Certification),
    ViewFile(String),
    ActionFailed(String),
}
