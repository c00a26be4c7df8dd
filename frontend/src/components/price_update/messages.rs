use common::config::ClientConfig;
use common::error::ServiceError;
use common::requests::ValidatedProducts;

pub enum Msg {
    SetConfig(ClientConfig),
    FileChosen(web_sys::File),
    FileRead {
        name: String,
        contents: Result<Vec<u8>, String>,
    },
    Validate,
    ValidationFinished(Result<ValidatedProducts, ServiceError>),
    Update,
    UpdateFinished(Result<(), ServiceError>),
    DismissNotice,
}
