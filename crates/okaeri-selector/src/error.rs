use thiserror::Error;

use okaeri_store::StoreError;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("selector is not ready; call initialize first")]
    NotReady,

    #[error("filter '{0}' is not offered by this selector")]
    FilterUnavailable(String),

    #[error("{0} is disabled for this selector")]
    FeatureDisabled(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}
