use rocketshoes_cart::errors::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Cart(#[from] CartError),

    /// A cart action failed; `message` is what the user sees.
    #[error("{message}")]
    Action {
        message: &'static str,
        #[source]
        source: CartError,
    },

    /// The action is not offered in the current state (a disabled button).
    #[error("{0}")]
    Unavailable(String),
}
