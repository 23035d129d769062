use common::model::account::Account;
use common::model::certification::Certification;

pub enum Msg {
    AccountsLoaded(Vec<Account>),
    TypesLoaded(Vec<String>),
    LoadFailed(String),
    SetAccount(String),
    SetType(String),
    TypeFocused,
    TypeBlurred,
    DismissSuggestions,
    PickType(String),
    SetName(String),
    SetCertDate(String),
    SetNotes(String),
    FileSelected(web_sys::File),
    FileUploaded(String),
    UploadFailed(String),
    ClearFile,
    Submit,
    Saved(Certification),
    SaveFailed(String),
}
