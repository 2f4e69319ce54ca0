//! The interactive command loop.

use std::io::{self, Write};

use brasskey_engine::SessionStatus;
use brasskey_foundation::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// An interactive loop over one [`Session`].
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the command loop until quit, EOF, or a win.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }
        println!("{}", self.render_scene());

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);

            match trimmed.to_lowercase().as_str() {
                "quit" | "exit" => break,
                "help" => {
                    print_help();
                    continue;
                }
                "look" => {
                    println!("{}", self.render_scene());
                    continue;
                }
                "inventory" => {
                    println!("{}", self.render_inventory());
                    continue;
                }
                "diagnostics" => {
                    for diagnostic in self.session.drain_diagnostics() {
                        println!("  {diagnostic}");
                    }
                    continue;
                }
                _ => {}
            }

            println!("{}", self.session.command(trimmed));
            if self.session.status() == SessionStatus::Won {
                println!("\n*** You have won! ***");
                break;
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    fn render_scene(&self) -> String {
        let view = self.session.scene_view();
        let mut out = format!("[{}]", view.name);
        for entity in view.entities.iter().filter(|entity| entity.visible) {
            out.push_str(&format!("\n  - {} ({})", entity.name, entity.id));
        }
        out
    }

    fn render_inventory(&self) -> String {
        let view = self.session.inventory_view();
        if view.items.is_empty() {
            return "You are carrying nothing.".to_string();
        }
        let mut out = String::from("You are carrying:");
        for item in &view.items {
            out.push_str(&format!("\n  - {} ({})", item.name, item.id));
        }
        out
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("brasskey v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands, `quit` to leave.\n");
        let _ = io::stdout().flush();
    }
}

fn print_help() {
    println!(
        "Commands:
    <verb> <object>              e.g. `open door`, `look at key`
    use <object> with <object>   combine two objects
    give <object> to <object>    offer an object
    look                         describe the current scene
    inventory                    list carried items
    diagnostics                  show script anomalies
    quit                         leave the game"
    );
}
