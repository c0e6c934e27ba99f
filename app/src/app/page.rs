use super::*;

/// Shown when nothing is playing
pub const NOTHING_PLAYING: &str = "今なにも再生してないっぽい!";

/// Id of the element the fallback message is appended to
pub const ROOT_ID: &str = "root";

/// The side effects an [`Outcome`] can have on the page
pub trait Page {
    type Error: std::fmt::Display;

    /// Navigates away, adding a history entry
    fn navigate(&mut self, to: &str) -> Result<(), Self::Error>;

    /// Appends a paragraph with [`NOTHING_PLAYING`] to the [`ROOT_ID`] element
    fn render_nothing_playing(&mut self) -> Result<(), Self::Error>;
}

/// Carries out `outcome` on `page`
///
/// Failures are only logged, the page is left as it is.
pub fn apply<P: Page>(outcome: Outcome, page: &mut P) {
    let result = match &outcome {
        Outcome::NothingPlaying => page.render_nothing_playing(),
        Outcome::Failed(err) => {
            log::error!("{err}");
            Ok(())
        }
        redirect => match redirect.redirect_to() {
            Some(to) => {
                log::info!("Redirecting to {to}");
                page.navigate(to)
            }
            None => Ok(()),
        },
    };
    if let Err(err) = result {
        log::error!("Could not update the page: {err}");
    }
}
