pub mod auth;
pub mod children;
pub mod dashboard;
pub mod dispatch;
pub mod home;
pub mod journal;
pub mod messages;
pub mod plans;
pub mod shared;
pub mod visits;

#[cfg(test)]
mod tests {
    use cp_core::entities::{Child, JournalEntry, Message, ParentingPlan, Visit};
    use pretty_assertions::assert_eq;

    use super::{children, journal, messages, plans, visits};
    use crate::cli::OutputFormat;
    use crate::output::render_list;

    #[test]
    fn empty_collections_print_their_empty_state() {
        let table = OutputFormat::Table;
        let rendered = [
            render_list::<Child, _, _>(&[], table, children::EMPTY, children::row),
            render_list::<ParentingPlan, _, _>(&[], table, plans::EMPTY, plans::row),
            render_list::<Visit, _, _>(&[], table, visits::EMPTY, visits::row),
            render_list::<Message, _, _>(&[], table, messages::EMPTY, messages::row),
            render_list::<JournalEntry, _, _>(&[], table, journal::EMPTY, journal::row),
        ]
        .map(|out| out.expect("render"));

        assert_eq!(
            rendered,
            [
                "No children found.",
                "No plans found.",
                "No visits scheduled.",
                "No messages yet.",
                "No journal entries.",
            ]
        );
    }

    #[test]
    fn empty_collections_are_empty_arrays_in_json() {
        let out = render_list::<Visit, _, _>(&[], OutputFormat::Raw, visits::EMPTY, visits::row)
            .expect("render");
        assert_eq!(out, "[]");
    }
}
