pub mod translate;

pub use translate::{__path_handle_result, __path_handle_translate};
pub use translate::{
    handle_result, handle_translate, ColorPair, TranslateForm, TranslateRequestBody,
    TranslateResponse,
};
