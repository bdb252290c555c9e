use crate::domain::{EditRequest, Post};
use crate::error::Notice;
use crate::render::ListView;

/// Raw contents of the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub title: String,
    pub content: String,
}

/// UI layer driven by the controller.
///
/// Implementations own the page elements (form, search field, list and
/// empty state); the controller never reaches for them directly.
pub trait PostsView {
    /// Replace the displayed list with `list`.
    fn show_list(&mut self, list: &ListView);

    /// Show a blocking notice to the user.
    fn notify(&mut self, notice: Notice);

    /// Ask the user to confirm a destructive action.
    fn confirm(&mut self, question: &str) -> bool;

    /// Current contents of the create form.
    fn form_input(&self) -> FormInput;

    /// Clear both create form fields.
    fn clear_form(&mut self);

    /// Clear the search field.
    fn clear_search(&mut self);

    /// Collect new title and content for `post`, seeded with its current values.
    fn request_edit(&mut self, post: &Post) -> EditRequest;
}
