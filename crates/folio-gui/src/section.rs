pub mod about;
pub mod contact;
pub mod hero;
pub mod portfolio;

/// Side effects a section asks the app to perform.
///
/// Sections return these from `update()`; the app interprets them in one
/// place.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    /// Open a link with the system handler.
    OpenUrl(String),
    /// Put text on the clipboard and confirm with a toast.
    CopyToClipboard(String),
    /// Start downloading a preview image if it is not cached yet.
    FetchThumbnail(String),
}
