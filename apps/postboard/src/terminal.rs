//! Line-oriented terminal front end implementing the posts view.

use std::fmt;
use std::io::{self, BufRead, Write};

use postboard_core::Notice;
use postboard_core::domain::{EditRequest, Post};
use postboard_core::ports::{FormInput, PostsView};
use postboard_core::render::ListView;

/// Typed at an edit prompt to abandon the edit.
const CANCEL: &str = ":cancel";
/// Typed at an edit prompt to empty the field.
const CLEAR: &str = ":clear";

/// Terminal view over any line input and text output.
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    form: FormInput,
    search: String,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            form: FormInput::default(),
            search: String::new(),
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.output, "{args}") {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.form.title = title;
    }

    pub fn set_content(&mut self, content: String) {
        self.form.content = content;
    }

    pub fn set_search(&mut self, query: String) {
        self.search = query;
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Ask for a new value seeded with `current`.
    ///
    /// Blank keeps the current value; `None` means the user cancelled.
    fn prompt_field(&mut self, label: &str, current: &str) -> Option<String> {
        let answer = match self.read_line(&format!("{label} [{current}]: ")) {
            Ok(answer) => answer?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from terminal");
                return None;
            }
        };

        match answer.as_str() {
            CANCEL => None,
            CLEAR => Some(String::new()),
            "" => Some(current.to_string()),
            _ => Some(answer),
        }
    }
}

impl<R: BufRead, W: Write> PostsView for TerminalView<R, W> {
    fn show_list(&mut self, list: &ListView) {
        // Mirrors the search field, which keeps its text until refresh.
        if !self.search.is_empty() {
            let query = self.search.clone();
            self.say(format_args!("search: \"{query}\""));
        }

        if list.empty_state_visible {
            self.say(format_args!("(no posts yet)"));
            return;
        }

        for item in &list.items {
            self.say(format_args!("[{}] {}", item.id, item.title));
            if !item.content.is_empty() {
                for line in item.content.lines() {
                    self.say(format_args!("    {line}"));
                }
            }
            self.say(format_args!("    {}", item.meta));
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.say(format_args!("! {notice}"));
    }

    fn confirm(&mut self, question: &str) -> bool {
        match self.read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from terminal");
                false
            }
        }
    }

    fn form_input(&self) -> FormInput {
        self.form.clone()
    }

    fn clear_form(&mut self) {
        self.form = FormInput::default();
    }

    fn clear_search(&mut self) {
        self.search.clear();
    }

    fn request_edit(&mut self, post: &Post) -> EditRequest {
        let Some(title) = self.prompt_field("New title", &post.title) else {
            return EditRequest::cancelled();
        };
        let Some(content) = self.prompt_field("New content", post.content()) else {
            return EditRequest {
                title: Some(title),
                content: None,
            };
        };

        EditRequest::new(title, content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::Utc;
    use postboard_core::domain::PostId;
    use postboard_core::render::Renderer;

    use super::*;

    fn view(input: &str) -> TerminalView<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(view: &TerminalView<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(view.output().clone()).unwrap()
    }

    fn post() -> Post {
        Post {
            id: PostId(4),
            title: "Old title".to_string(),
            content: Some("Old body".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_edit_blank_keeps_current_values() {
        let mut v = view("\n\n");
        assert_eq!(v.request_edit(&post()), EditRequest::new("Old title", "Old body"));
    }

    #[test]
    fn test_edit_new_values_and_clear() {
        let mut v = view("New\n:clear\n");
        assert_eq!(v.request_edit(&post()), EditRequest::new("New", ""));
    }

    #[test]
    fn test_edit_cancel_at_content() {
        let mut v = view("New\n:cancel\n");
        let request = v.request_edit(&post());
        assert_eq!(request.title.as_deref(), Some("New"));
        assert_eq!(request.content, None);
    }

    #[test]
    fn test_edit_end_of_input_cancels() {
        let mut v = view("");
        assert_eq!(v.request_edit(&post()), EditRequest::cancelled());
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        assert!(view("y\n").confirm("Delete?"));
        assert!(view("YES\n").confirm("Delete?"));
        assert!(!view("\n").confirm("Delete?"));
        assert!(!view("").confirm("Delete?"));
    }

    #[test]
    fn test_show_list_and_empty_state() {
        let mut v = view("");
        v.show_list(&Renderer::utc().render(&[post()]));
        v.show_list(&Renderer::utc().render(&[]));

        let out = printed(&v);
        assert!(out.contains("[4] Old title\n    Old body\n    ID: 4 · "));
        assert!(out.ends_with("(no posts yet)\n"));
    }

    #[test]
    fn test_search_header_until_cleared() {
        let mut v = view("");
        v.set_search("old".to_string());
        v.show_list(&Renderer::utc().render(&[post()]));
        assert!(printed(&v).starts_with("search: \"old\"\n[4] Old title\n"));

        v.clear_search();
        v.show_list(&Renderer::utc().render(&[]));
        let out = printed(&v);
        assert_eq!(out.matches("search: ").count(), 1);
        assert!(out.ends_with("\n(no posts yet)\n"));
    }

    #[test]
    fn test_form_fields() {
        let mut v = view("");
        v.set_title("t".to_string());
        v.set_content("c".to_string());
        assert_eq!(v.form_input().title, "t");

        v.clear_form();
        assert_eq!(v.form_input(), FormInput::default());
    }
}
