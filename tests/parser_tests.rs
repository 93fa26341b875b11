use pretty_assertions::assert_eq;
use task_tracker::models::Status;
use task_tracker::parser::{parse, Command, ParseError};

#[test]
fn test_empty_input() {
    let tokens: [&str; 0] = [];
    assert_eq!(parse(&tokens), Err(ParseError::EmptyInput));
    assert_eq!(ParseError::EmptyInput.to_string(), "Empty input");
}

#[test]
fn test_unknown_command_names_the_word() {
    for word in ["remove", "frobnicate", "mark", "lists"] {
        let err = parse(&[word, "1"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand(word.to_string()));
        assert!(err.to_string().contains(word));
    }
}

#[test]
fn test_add_requires_description() {
    let err = parse(&["add"]).unwrap_err();
    assert_eq!(err.to_string(), "Missing task description");
}

#[test]
fn test_add_joins_tokens() {
    assert_eq!(
        parse(&["add", "Buy", "milk"]),
        Ok(Command::Add { description: "Buy milk".into() })
    );
}

#[test]
fn test_update_arity() {
    assert_eq!(parse(&["update", "3", "x", "y"]), Err(ParseError::UpdateSyntax));
    assert_eq!(parse(&["update", "3"]), Err(ParseError::UpdateSyntax));
    assert_eq!(
        ParseError::UpdateSyntax.to_string(),
        "Invalid syntax! update <id> <description>"
    );
}

#[test]
fn test_update_requires_positive_id() {
    for id in ["0", "-2", "abc", "1.5"] {
        let err = parse(&["update", id, "x"]).unwrap_err();
        assert_eq!(err.to_string(), "Id must be a positive integer");
    }
}

#[test]
fn test_update_valid() {
    assert_eq!(
        parse(&["update", "3", "newdesc"]),
        Ok(Command::Update { id: 3, description: "newdesc".into() })
    );
}

#[test]
fn test_delete_drops_unparseable_ids() {
    assert_eq!(
        parse(&["delete", "1", "abc", "3"]),
        Ok(Command::Delete { ids: vec![1, 3] })
    );
}

#[test]
fn test_delete_requires_an_argument() {
    let err = parse(&["delete"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid syntax! delete <id1> [id2] ...");
}

#[test]
fn test_delete_with_only_garbage_is_still_valid() {
    assert_eq!(parse(&["delete", "x", "y"]), Ok(Command::Delete { ids: vec![] }));
}

#[test]
fn test_mark_commands() {
    assert_eq!(
        parse(&["mark-todo", "2"]),
        Ok(Command::MarkToDo { ids: vec![2] })
    );
    assert_eq!(
        parse(&["mark-in-progress", "1", "nope", "4"]),
        Ok(Command::MarkInProgress { ids: vec![1, 4] })
    );
    assert_eq!(
        parse(&["MARK-DONE", "5"]),
        Ok(Command::MarkDone { ids: vec![5] })
    );
    assert_eq!(
        parse(&["mark-done"]),
        Err(ParseError::MissingIds("mark-done".into()))
    );
}

#[test]
fn test_list_status_spellings() {
    let expected = Ok(Command::List { statuses: vec![Status::InProgress] });
    assert_eq!(parse(&["list", "in-progress"]), expected);
    assert_eq!(parse(&["list", "inprogress"]), expected);
}

#[test]
fn test_list_defaults_to_all_statuses() {
    assert_eq!(
        parse(&["list"]),
        Ok(Command::List { statuses: vec![Status::ToDo, Status::InProgress, Status::Done] })
    );
}

#[test]
fn test_list_drops_unknown_statuses() {
    assert_eq!(
        parse(&["list", "done", "someday", "todo"]),
        Ok(Command::List { statuses: vec![Status::Done, Status::ToDo] })
    );
}

#[test]
fn test_help() {
    assert_eq!(parse(&["help"]), Ok(Command::Help));
}

#[test]
fn test_accepts_owned_strings() {
    let args: Vec<String> = vec!["add".into(), "Write".into(), "tests".into()];
    assert_eq!(
        parse(&args),
        Ok(Command::Add { description: "Write tests".into() })
    );
}
