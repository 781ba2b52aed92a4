use markdraft::document::SAMPLE;
use markdraft::editor::Format;
use markdraft::export::ExportFormat;
use markdraft::session::{CONTENT_KEY, JsonFileStore, Message, Session, Store, update};

fn apply<S: Store>(session: Session<S>, messages: Vec<Message>) -> Session<S> {
    messages.into_iter().fold(session, update)
}

#[test]
fn test_edits_survive_reopening_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let session = Session::open(JsonFileStore::open(&path).unwrap());
    assert_eq!(session.content(), SAMPLE);

    let session = apply(
        session,
        vec![
            Message::SetText("release notes".into()),
            Message::Select { start: 0, end: 7 },
            Message::Format(Format::Bold),
        ],
    );
    assert_eq!(session.content(), "**release** notes");

    let reopened = Session::open(JsonFileStore::open(&path).unwrap());
    assert_eq!(reopened.content(), "**release** notes");
    assert_eq!(
        reopened.store().get(CONTENT_KEY).as_deref(),
        Some("**release** notes")
    );
}

#[test]
fn test_new_empty_tab_reopens_as_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let session = Session::open(JsonFileStore::open(&path).unwrap());
    let session = update(session, Message::NewFile);
    assert_eq!(session.content(), "");

    let reopened = Session::open(JsonFileStore::open(&path).unwrap());
    assert_eq!(reopened.content(), SAMPLE);
}

#[test]
fn test_writing_session_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::open(JsonFileStore::open(dir.path().join("store.json")).unwrap());

    let mut session = apply(
        session,
        vec![
            Message::SetText(String::new()),
            Message::Format(Format::Heading(1)),
            Message::SetText("# Plan\n\n".into()),
            Message::Select { start: 8, end: 8 },
            Message::Format(Format::TaskList),
            Message::SetFindQuery("Task".into()),
            Message::SetReplacement("Step".into()),
            Message::ReplaceAll,
            Message::Export(ExportFormat::Html),
        ],
    );

    assert_eq!(
        session.content(),
        "# Plan\n\n- [ ] Step 1\n- [ ] Step 2\n- [x] Completed task"
    );
    assert_eq!(session.toc().len(), 1);
    assert_eq!(session.stats().word_count, 16);

    let download = session.take_download().unwrap();
    assert_eq!(download.file_name, "Untitled Document.html");
    let html = String::from_utf8(download.bytes).unwrap();
    assert_eq!(html.matches(r#"type="checkbox""#).count(), 3);
    assert!(html.contains(">Plan</h1>"));
}
