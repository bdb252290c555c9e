//! Interactive session - reads commands and drives the controller.

use std::io::{BufRead, Write};

use postboard_core::PostsController;
use postboard_core::ports::PostsView;
use postboard_core::render::Action;

use crate::command::{self, Command, HELP};
use crate::terminal::TerminalView;

type Controller<R, W> = PostsController<TerminalView<R, W>>;

/// Run until `quit` or end of input. Starts with one load.
pub async fn run<R: BufRead, W: Write>(ctl: &mut Controller<R, W>) -> anyhow::Result<()> {
    ctl.load().await;

    while let Some(line) = ctl.view_mut().read_line("> ")? {
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                ctl.view_mut().say(format_args!("{e}"));
                continue;
            }
        };

        if !execute(ctl, command).await {
            break;
        }
    }

    tracing::debug!("Session ended");
    Ok(())
}

/// Execute one command. Returns `false` when the session should end.
async fn execute<R: BufRead, W: Write>(ctl: &mut Controller<R, W>, command: Command) -> bool {
    match command {
        Command::Add { title, content } => {
            ctl.view_mut().set_title(title);
            ctl.view_mut().set_content(content);
            ctl.create().await;
        }
        Command::Title(title) => ctl.view_mut().set_title(title),
        Command::Content(content) => ctl.view_mut().set_content(content),
        Command::Submit => {
            ctl.create().await;
        }
        Command::Form => {
            let form = ctl.view().form_input();
            ctl.view_mut()
                .say(format_args!("title: {}\ncontent: {}", form.title, form.content));
        }
        Command::Refresh => {
            ctl.refresh().await;
        }
        Command::Search(query) => {
            ctl.view_mut().set_search(query.clone());
            ctl.search(&query);
        }
        Command::Edit(id) => {
            ctl.dispatch(Action::Edit(id)).await;
        }
        Command::Delete(id) => {
            ctl.dispatch(Action::Delete(id)).await;
        }
        Command::Html => {
            let html = ctl.rendered().to_html();
            ctl.view_mut().say(format_args!("{html}"));
        }
        Command::Help => ctl.view_mut().say(format_args!("{HELP}")),
        Command::Quit => return false,
    }
    true
}
