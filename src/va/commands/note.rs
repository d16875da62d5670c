use crate::commands::{CmdMessage, CmdResult, DisplayNote};
use crate::error::Result;
use crate::model::Note;
use crate::registry::CmdContext;
use crate::store::StateStore;

pub const HELP: &str = "
note <text> — save a quick note
note list     — list notes
";

pub fn run<S: StateStore>(ctx: &mut CmdContext<'_, S>, args: &[String]) -> Result<CmdResult> {
    match args.first().map(String::as_str) {
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Usage: note <text> | note list"))),
        Some("list") => Ok(list(ctx)),
        Some(_) => add(ctx, args.join(" ")),
    }
}

fn add<S: StateStore>(ctx: &mut CmdContext<'_, S>, text: String) -> Result<CmdResult> {
    ctx.session.mutate(|state| {
        state.notes.push(Note::new(text));
        Ok(())
    })?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Saved note.")))
}

fn list<S: StateStore>(ctx: &mut CmdContext<'_, S>) -> CmdResult {
    let notes = &ctx.session.state().notes;
    if notes.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("(no notes)"));
    }
    let listed = notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: i + 1,
            note: note.clone(),
        })
        .collect();
    CmdResult::default().with_listed_notes(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::CommandFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adding_saves_joined_text() {
        let mut fx = CommandFixture::new();
        let result = fx.run(run, "buy milk").unwrap();

        assert_eq!(result.messages[0].content, "Saved note.");
        assert_eq!(fx.session.state().notes.len(), 1);
        assert_eq!(fx.session.state().notes[0].text, "buy milk");
        assert_eq!(fx.session.store().saves(), 1);
    }

    #[test]
    fn list_keeps_insertion_order_with_one_based_indexes() {
        let mut fx = CommandFixture::new();
        fx.run(run, "first").unwrap();
        fx.run(run, "second").unwrap();
        fx.run(run, "third").unwrap();

        let result = fx.run(run, "list").unwrap();
        let listed: Vec<_> = result
            .listed_notes
            .iter()
            .map(|dn| (dn.index, dn.note.text.as_str()))
            .collect();
        assert_eq!(listed, [(1, "first"), (2, "second"), (3, "third")]);
    }

    #[test]
    fn empty_list_says_so() {
        let mut fx = CommandFixture::new();
        let result = fx.run(run, "list").unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages[0].content, "(no notes)");
    }

    #[test]
    fn listing_does_not_save() {
        let mut fx = CommandFixture::new();
        fx.run(run, "list").unwrap();
        assert_eq!(fx.session.store().saves(), 0);
    }

    #[test]
    fn no_arguments_shows_usage() {
        let mut fx = CommandFixture::new();
        let result = fx.run(run, "").unwrap();
        assert_eq!(result.messages[0].content, "Usage: note <text> | note list");
        assert!(fx.session.state().notes.is_empty());
    }

    #[test]
    fn unsaved_note_is_not_listed() {
        let mut fx = CommandFixture::with_store(InMemoryStore::failing());
        assert!(fx.run(run, "buy milk").is_err());

        let result = fx.run(run, "list").unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages[0].content, "(no notes)");
    }
}
