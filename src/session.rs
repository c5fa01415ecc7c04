//! One verification lookup from raw input to rendered output. The panel
//! trait stands in for the host page's surface (results area plus loading
//! indicator); handlers drive it with [`FragmentPanel`] to collect the HTML
//! they return.

use tracing::{error, warn};

use crate::client::{VerifyApi, VerifyError};
use crate::render;

pub const EMPTY_ADDRESS_MESSAGE: &str = "Please enter a wallet address.";

/// Write side of the host page: the results container and the loading
/// indicator. Implementations must tolerate repeated toggles.
pub trait ResultsPanel {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn clear_results(&mut self);
    fn show_results(&mut self, html: String);
}

/// Panel that accumulates into a plain HTML string, for handlers that send
/// the fragment back over HTTP.
#[derive(Default)]
pub struct FragmentPanel {
    html: String,
}

impl FragmentPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl ResultsPanel for FragmentPanel {
    // The fragment consumer has no loading surface; the page script owns
    // the indicator while the request is in flight.
    fn show_loading(&mut self) {}

    fn hide_loading(&mut self) {}

    fn clear_results(&mut self) {
        self.html.clear();
    }

    fn show_results(&mut self, html: String) {
        self.html = html;
    }
}

/// Run one lookup end to end. Never fails: every error becomes an inline
/// message in the panel, and the loading indicator is reset on every path
/// that showed it. Issues at most one upstream request; whitespace-only
/// input issues none.
pub async fn run_verification<A: VerifyApi>(
    api: &A,
    raw_address: &str,
    panel: &mut impl ResultsPanel,
) {
    let address = raw_address.trim();
    if address.is_empty() {
        warn!("[walletcheck] Lookup with empty address rejected");
        panel.show_results(render::inline_message(EMPTY_ADDRESS_MESSAGE));
        return;
    }

    panel.show_loading();
    panel.clear_results();

    // Single suspension point; both arms fall through to the indicator
    // reset below.
    match api.verify(address).await {
        Ok(result) => panel.show_results(render::results_fragment(&result)),
        Err(err) => {
            match &err {
                VerifyError::Api { status, detail } => error!(
                    "[walletcheck] Verification failed for {}: status {} ({})",
                    address, status, detail
                ),
                other => error!("[walletcheck] Verification failed for {}: {}", address, other),
            }
            panel.show_results(render::inline_message(&format!("Error: {}", err)));
        }
    }

    panel.hide_loading();
}
