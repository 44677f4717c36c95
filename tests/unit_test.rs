// Unit tests for contact-directory
// These exercise the public API of each module in isolation.

#[cfg(test)]
mod contact_tests {
    use contact_directory::contact::{Contact, ContactPage};

    #[test]
    fn initials_take_first_letters_of_first_two_words() {
        let c = Contact::new("1", "Ada Lovelace", "ada@example.com", "Engineer");
        assert_eq!(c.initials(), "AL");
        let c = Contact::new("2", "Jean Luc Picard", "jl@example.com", "Captain");
        assert_eq!(c.initials(), "JL");
        let c = Contact::new("3", "Cher", "cher@example.com", "Singer");
        assert_eq!(c.initials(), "C");
        let c = Contact::new("4", "", "nobody@example.com", "");
        assert_eq!(c.initials(), "");
    }

    #[test]
    fn mailto_link() {
        let c = Contact::new("1", "Ada Lovelace", "ada@example.com", "Engineer");
        assert_eq!(c.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn decodes_wire_field_names() {
        let raw = r#"{
            "contacts": [
                {"id": "7", "firstNameLastName": "Grace Hopper",
                 "emailAddress": "grace@example.com", "jobTitle": "Admiral"}
            ],
            "total": 40
        }"#;
        let page: ContactPage = serde_json::from_str(raw).expect("decode page");
        assert_eq!(page.total, 40);
        assert_eq!(page.contacts.len(), 1);
        let c = &page.contacts[0];
        assert_eq!(c.id, "7");
        assert_eq!(c.name, "Grace Hopper");
        assert_eq!(c.email, "grace@example.com");
        assert_eq!(c.job_title, "Admiral");
    }
}

#[cfg(test)]
mod selection_tests {
    use contact_directory::list::Selection;

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = Selection::new();
        assert!(s.is_empty());
        assert!(s.toggle("a"));
        assert!(s.contains("a"));
        assert_eq!(s.len(), 1);
        assert!(!s.toggle("a"));
        assert!(!s.contains("a"));
        assert!(s.is_empty());
    }

    #[test]
    fn newest_selection_has_highest_sequence() {
        let mut s = Selection::new();
        s.toggle("a");
        s.toggle("b");
        s.toggle("c");
        let seq = |s: &Selection, id: &str| s.sequence(id).expect("selected");
        assert!(seq(&s, "c") > seq(&s, "b"));
        assert!(seq(&s, "b") > seq(&s, "a"));

        // Reselecting moves an id ahead of the rest.
        s.toggle("a");
        s.toggle("a");
        assert!(seq(&s, "a") > seq(&s, "c"));
    }

    #[test]
    fn sequence_numbers_keep_growing() {
        let mut s = Selection::new();
        s.toggle("a");
        let first = s.sequence("a").expect("selected");
        s.toggle("a");
        assert_eq!(s.sequence("a"), None);
        s.toggle("a");
        assert!(s.sequence("a").expect("selected") > first);
    }
}

#[cfg(test)]
mod controller_tests {
    use contact_directory::contact::{Contact, ContactPage};
    use contact_directory::error::FetchError;
    use contact_directory::list::ListController;

    fn page(ids: std::ops::Range<usize>, total: usize) -> ContactPage {
        ContactPage {
            contacts: ids
                .map(|i| {
                    Contact::new(
                        i.to_string(),
                        format!("Person {i}"),
                        format!("person{i}@example.com"),
                        format!("Job {i}"),
                    )
                })
                .collect(),
            total,
        }
    }

    fn loaded(ids: std::ops::Range<usize>, total: usize) -> ListController {
        let mut list = ListController::new();
        assert!(list.begin_fetch());
        list.complete_fetch(Ok(page(ids, total)));
        list
    }

    fn order_ids(list: &ListController) -> Vec<String> {
        list.derived_order().iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn begin_fetch_guards_against_reentry() {
        let mut list = ListController::new();
        assert!(list.begin_fetch());
        assert!(list.is_loading());
        assert!(!list.begin_fetch());
        list.complete_fetch(Ok(page(0..10, 100)));
        assert!(!list.is_loading());
        assert!(list.begin_fetch());
    }

    #[test]
    fn initial_fetch_starts_once() {
        let mut list = ListController::new();
        assert!(list.start_initial_fetch());
        list.complete_fetch(Ok(page(0..10, 100)));
        assert!(!list.start_initial_fetch());
        assert!(!list.is_loading());
    }

    #[test]
    fn success_appends_and_updates_total() {
        let mut list = loaded(0..10, 100);
        assert_eq!(list.contacts().len(), 10);
        assert_eq!(list.total(), 100);
        list.begin_fetch();
        list.complete_fetch(Ok(page(10..20, 100)));
        assert_eq!(list.contacts().len(), 20);
        assert_eq!(list.contacts()[10].id, "10");
    }

    #[test]
    fn failure_stores_message_and_appends_nothing() {
        let mut list = loaded(0..10, 100);
        list.begin_fetch();
        list.complete_fetch(Err(FetchError::new("Something went wrong")));
        assert_eq!(list.error(), Some("Something went wrong"));
        assert_eq!(list.contacts().len(), 10);
        assert!(!list.is_loading());
    }

    #[test]
    fn blank_error_message_is_normalized() {
        let mut list = ListController::new();
        list.begin_fetch();
        list.complete_fetch(Err(FetchError::new("  ")));
        assert_eq!(list.error(), Some("An unknown error occurred"));
    }

    #[test]
    fn new_fetch_clears_error() {
        let mut list = ListController::new();
        list.begin_fetch();
        list.complete_fetch(Err(FetchError::new("")));
        assert!(list.error().is_some());
        list.begin_fetch();
        assert_eq!(list.error(), None);
    }

    #[test]
    fn result_without_fetch_in_flight_is_discarded() {
        let mut list = ListController::new();
        list.complete_fetch(Ok(page(0..10, 100)));
        assert!(list.contacts().is_empty());
        assert_eq!(list.total(), 0);
    }

    #[test]
    fn total_never_below_loaded_count() {
        let mut list = loaded(0..10, 5);
        assert_eq!(list.total(), 10);
        assert!(!list.has_more());
    }

    #[test]
    fn has_more_and_can_load_more() {
        let empty = ListController::new();
        assert!(!empty.has_more());

        let mut list = loaded(0..10, 20);
        assert!(list.has_more());
        assert!(list.can_load_more());

        list.begin_fetch();
        assert!(list.has_more());
        assert!(!list.can_load_more());
        list.complete_fetch(Err(FetchError::new("")));
        assert!(!list.can_load_more());

        list.begin_fetch();
        list.complete_fetch(Ok(page(10..20, 20)));
        assert!(!list.has_more());
        assert!(!list.can_load_more());
    }

    #[test]
    fn toggle_changes_count_and_back() {
        let mut list = loaded(0..10, 100);
        assert_eq!(list.selected_count(), 0);
        assert!(list.toggle_selection("3", 0));
        assert_eq!(list.selected_count(), 1);
        assert!(list.is_selected("3"));
        assert!(list.toggle_selection("3", 0));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn toggle_of_unknown_id_is_ignored() {
        let mut list = loaded(0..10, 100);
        assert!(!list.toggle_selection("nope", 3));
        assert_eq!(list.selected_count(), 0);
        assert_eq!(list.take_scroll_restore(), None);
    }

    #[test]
    fn scroll_offset_restored_once() {
        let mut list = loaded(0..10, 100);
        list.toggle_selection("4", 7);
        assert_eq!(list.take_scroll_restore(), Some(7));
        assert_eq!(list.take_scroll_restore(), None);
    }

    #[test]
    fn selected_first_newest_first_rest_in_fetch_order() {
        let mut list = loaded(0..6, 100);
        list.toggle_selection("2", 0);
        list.toggle_selection("4", 0);
        assert_eq!(order_ids(&list), vec!["4", "2", "0", "1", "3", "5"]);

        list.toggle_selection("4", 0);
        assert_eq!(order_ids(&list), vec!["2", "0", "1", "3", "4", "5"]);
    }

    #[test]
    fn derived_order_does_not_reorder_accumulated_set() {
        let mut list = loaded(0..5, 100);
        list.toggle_selection("3", 0);
        let fetched: Vec<&str> = list.contacts().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(fetched, vec!["0", "1", "2", "3", "4"]);
    }
}

#[cfg(test)]
mod view_tests {
    use contact_directory::contact::{Contact, ContactPage};
    use contact_directory::error::FetchError;
    use contact_directory::list::view::test_id;
    use contact_directory::list::{ListController, ListView};

    fn loaded(count: usize, total: usize) -> ListController {
        let mut list = ListController::new();
        list.begin_fetch();
        list.complete_fetch(Ok(ContactPage {
            contacts: (0..count)
                .map(|i| Contact::new(i.to_string(), format!("Person {i}"), "p@example.com", "Job"))
                .collect(),
            total,
        }));
        list
    }

    #[test]
    fn hooks_for_loaded_list() {
        let list = loaded(10, 100);
        let view = ListView::from_controller(&list);
        assert_eq!(view.count(test_id::LIST_ROOT), 1);
        assert_eq!(view.count(test_id::CONTACT_ITEM), 10);
        assert_eq!(view.count(test_id::LOAD_MORE_BUTTON), 1);
        assert_eq!(view.count(test_id::SELECTED_COUNTER), 1);
        assert_eq!(view.count(test_id::ERROR_STATE), 0);
        assert_eq!(view.count(test_id::LOADING_STATE), 0);
        assert_eq!(view.selection_counter_text(), "0");
    }

    #[test]
    fn load_more_absent_when_everything_loaded() {
        let list = loaded(10, 10);
        let view = ListView::from_controller(&list);
        assert_eq!(view.load_more, None);
        assert_eq!(view.count(test_id::LOAD_MORE_BUTTON), 0);
    }

    #[test]
    fn load_more_disabled_while_loading() {
        let mut list = loaded(10, 100);
        list.begin_fetch();
        let view = ListView::from_controller(&list);
        assert!(view.loading);
        assert_eq!(view.count(test_id::LOADING_STATE), 1);
        assert_eq!(view.load_more.map(|b| b.enabled), Some(false));
    }

    #[test]
    fn error_shows_notice_and_retry() {
        let mut list = ListController::new();
        list.begin_fetch();
        list.complete_fetch(Err(FetchError::new("Something went wrong")));
        let view = ListView::from_controller(&list);
        assert_eq!(view.error, Some("Something went wrong"));
        assert_eq!(view.count(test_id::ERROR_STATE), 1);
        assert_eq!(view.count(test_id::RETRY_BUTTON), 1);
        assert_eq!(view.count(test_id::CONTACT_ITEM), 0);
    }

    #[test]
    fn rows_carry_selection_and_label() {
        let mut list = loaded(3, 100);
        list.toggle_selection("1", 0);
        let view = ListView::from_controller(&list);
        assert_eq!(view.rows[0].contact.id, "1");
        assert!(view.rows[0].selected);
        assert!(!view.rows[1].selected);
        assert_eq!(view.rows[0].label(), "Select Person 1");
        assert_eq!(view.row_index_of("1"), Some(0));
        assert_eq!(view.row_index_of("0"), Some(1));
    }
}

#[cfg(test)]
mod keymap_tests {
    use contact_directory::app::keymap::{KeyAction, Keymap, format_action};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_resolve() {
        let km = Keymap::default();
        assert_eq!(km.resolve(&key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(km.resolve(&key(KeyCode::Char(' '))), Some(KeyAction::ToggleSelect));
        assert_eq!(km.resolve(&key(KeyCode::Enter)), Some(KeyAction::ToggleSelect));
        assert_eq!(km.resolve(&key(KeyCode::Char('m'))), Some(KeyAction::LoadMore));
        assert_eq!(km.resolve(&key(KeyCode::Char('r'))), Some(KeyAction::Retry));
        assert_eq!(km.resolve(&key(KeyCode::Char('e'))), Some(KeyAction::OpenEmail));
        assert_eq!(km.resolve(&key(KeyCode::Char('j'))), Some(KeyAction::MoveDown));
        assert_eq!(km.resolve(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn file_overrides_layer_on_defaults() {
        let km = Keymap::parse(
            "# comment\nLoadMore = Ctrl+l\nToggleSelect = x\nbogus line\nNotAnAction = y\n",
        );
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(km.resolve(&ctrl_l), Some(KeyAction::LoadMore));
        assert_eq!(km.resolve(&key(KeyCode::Char('x'))), Some(KeyAction::ToggleSelect));
        assert_eq!(km.resolve(&key(KeyCode::Char('m'))), Some(KeyAction::LoadMore));
        assert_eq!(km.resolve(&key(KeyCode::Char('y'))), None);
    }

    #[test]
    fn format_key_specs() {
        assert_eq!(Keymap::format_key(KeyModifiers::NONE, KeyCode::Char(' ')), "Space");
        assert_eq!(Keymap::format_key(KeyModifiers::CONTROL, KeyCode::Char('c')), "Ctrl+c");
        assert_eq!(Keymap::format_key(KeyModifiers::NONE, KeyCode::PageDown), "PageDown");
        assert_eq!(format_action(KeyAction::OpenEmail), "OpenEmail");
    }

    #[test]
    fn keys_for_lists_all_bindings() {
        let km = Keymap::default();
        assert_eq!(km.keys_for(KeyAction::ToggleSelect), vec!["Enter", "Space"]);
    }
}

#[cfg(test)]
mod theme_tests {
    use contact_directory::app::Theme;
    use ratatui::style::Color;

    #[test]
    fn parse_color_forms() {
        assert_eq!(Theme::parse_color("#FF0080"), Some(Color::Rgb(0xff, 0x00, 0x80)));
        assert_eq!(Theme::parse_color("00ff00"), Some(Color::Rgb(0, 0xff, 0)));
        assert_eq!(Theme::parse_color("reset"), Some(Color::Reset));
        assert_eq!(Theme::parse_color("#12345"), None);
        assert_eq!(Theme::parse_color("zzzzzz"), None);
    }

    #[test]
    fn parse_overrides_known_keys_only() {
        let t = Theme::parse("selected_fg = #010203\nunknown = #FFFFFF\nerror_fg = nope\n");
        assert_eq!(t.selected_fg, Color::Rgb(1, 2, 3));
        assert_eq!(format!("{:?}", t.error_fg), format!("{:?}", Theme::mocha().error_fg));
    }
}

#[cfg(test)]
mod source_tests {
    use contact_directory::source::{ContactSource, GeneratedSource};

    #[test]
    fn generated_source_pages_until_total() {
        let mut src = GeneratedSource::new(10, 25);
        let sizes: Vec<usize> = (0..4)
            .map(|_| src.fetch_next_page().expect("page").contacts.len())
            .collect();
        assert_eq!(sizes, vec![10, 10, 5, 0]);
    }

    #[test]
    fn generated_ids_are_unique_and_sequential() {
        let mut src = GeneratedSource::default();
        let first = src.fetch_next_page().expect("page");
        let second = src.fetch_next_page().expect("page");
        assert_eq!(first.total, 100);
        assert_eq!(first.contacts[0].id, "0");
        assert_eq!(second.contacts[0].id, "10");
        assert_eq!(second.contacts[9].id, "19");
    }

    #[test]
    fn injected_failures_do_not_advance_cursor() {
        let mut src = GeneratedSource::new(10, 100).with_fail_every(2);
        assert!(src.fetch_next_page().is_ok());
        let err = src.fetch_next_page().expect_err("second call fails");
        assert_eq!(err.message(), "Something went wrong");
        let third = src.fetch_next_page().expect("third call succeeds");
        assert_eq!(third.contacts[0].id, "10");
    }

    #[test]
    fn closures_are_sources() {
        use contact_directory::contact::ContactPage;
        use contact_directory::error::FetchError;
        let mut calls = 0usize;
        let mut src = move || -> Result<ContactPage, FetchError> {
            calls += 1;
            Ok(ContactPage { contacts: vec![], total: calls })
        };
        assert_eq!(src.fetch_next_page().expect("page").total, 1);
        assert_eq!(src.fetch_next_page().expect("page").total, 2);
    }
}

#[cfg(test)]
mod cli_tests {
    use clap::Parser;
    use contact_directory::cli::Cli;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["contact-directory"]).expect("parse");
        assert_eq!(cli.page_size, 10);
        assert_eq!(cli.total, 100);
        assert!(cli.source.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn zero_page_size_rejected() {
        let cli = Cli::try_parse_from(["contact-directory", "--page-size", "0"]).expect("parse");
        assert!(cli.validate().is_err());
    }

    #[test]
    fn zero_fail_every_rejected() {
        let cli = Cli::try_parse_from(["contact-directory", "--fail-every", "0"]).expect("parse");
        assert!(cli.validate().is_err());
    }

    #[test]
    fn generated_source_follows_options() {
        let cli = Cli::try_parse_from(["contact-directory", "--page-size", "4", "--total", "6"])
            .expect("parse");
        let mut src = cli.build_source();
        assert_eq!(src.fetch_next_page().expect("page").contacts.len(), 4);
        assert_eq!(src.fetch_next_page().expect("page").contacts.len(), 2);
    }
}
