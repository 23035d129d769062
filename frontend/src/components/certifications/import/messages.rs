use common::model::import::{ImportOutcome, ImportRow};

pub enum Msg {
    DownloadTemplate,
    TemplateDownloaded(Result<(), String>),
    FileSelected(web_sys::File),
    Parsed(Result<Vec<ImportRow>, String>),
    ReplaceFile,
    Confirm,
    Committed(Result<ImportOutcome, String>),
    Close,
}
