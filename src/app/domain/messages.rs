use std::path::PathBuf;

/// How the one order request ended, as far as the transport can tell.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The request left without a transport error. The response is never read.
    Delivered,
    Failed(String),
}

/// All messages that can be sent through the FLTK channel.
/// Each widget callback, timer and background task sends one of these;
/// the dispatch loop in main hands them to `Customizer::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Preview controls
    TextEdited(String),
    ColorPicked(usize),
    FontPicked(usize),

    // Cart
    AddToCart,
    AddToCartFeedbackElapsed,
    OpenCheckout,

    // Checkout panel
    CloseCheckout,
    BackdropClicked,
    HideCheckout,

    // Order form
    NameEdited(String),
    PhoneEdited(String),
    AddressEdited(String),
    BrowseProof,
    ProofSelected(Option<PathBuf>),
    SubmitOrder,

    // Background submission
    OrderSettled(SubmissionOutcome),

    Quit,
}
