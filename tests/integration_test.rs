use question_authoring::config::Config;
use question_authoring::edit::{self, QuestionEdit};
use question_authoring::models::{
    load_lesson_file, save_lesson_file, AnswerOption, ProblemKind, ProblemType, Question,
};
use question_authoring::orchestrator::{EditSession, QuestionStore};
use question_authoring::utils::logging;
use question_authoring::workflow::{QuestionEditor, QuestionHost};
use serde_json::json;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("qa_{}_{}", std::process::id(), name))
}

fn single(problem_type: ProblemType) -> (QuestionStore, QuestionEditor) {
    let store = QuestionStore::new(
        vec![Question::with_problem_type(problem_type)],
        ProblemType::default(),
    );
    (store, QuestionEditor::new())
}

fn options(store: &QuestionStore) -> Vec<AnswerOption> {
    store.questions()[0].problem_types[0].options.clone()
}

#[test]
fn test_scenario_a_correctness_then_type_switch() {
    let (mut store, mut editor) = single(
        ProblemType::new(ProblemKind::Radio)
            .with_options(vec![AnswerOption::new("A", false), AnswerOption::new("B", false)]),
    );

    editor
        .edit(
            &mut store,
            QuestionEdit::SetOptionCorrectness {
                problem_type: 0,
                option: 0,
                checked: true,
            },
        )
        .unwrap();
    assert_eq!(
        options(&store),
        vec![AnswerOption::new("A", true), AnswerOption::new("B", false)]
    );

    editor
        .edit(
            &mut store,
            QuestionEdit::ChangeType {
                problem_type: 0,
                kind: ProblemKind::Checkbox,
            },
        )
        .unwrap();
    assert_eq!(
        options(&store),
        vec![AnswerOption::new("A", false), AnswerOption::new("B", false)]
    );
    assert_eq!(store.questions()[0].problem_types[0].kind(), ProblemKind::Checkbox);
}

#[test]
fn test_scenario_b_image_lifecycle() {
    let (mut store, mut editor) = single(ProblemType::default());
    assert!(store.questions()[0].img_urls.is_empty());

    editor.edit(&mut store, QuestionEdit::AddImage).unwrap();
    assert_eq!(store.questions()[0].img_urls, vec![String::new()]);

    editor
        .edit(
            &mut store,
            QuestionEdit::SetImage {
                image: 0,
                url: "http://x/y.png".to_string(),
            },
        )
        .unwrap();
    assert_eq!(store.questions()[0].img_urls, vec!["http://x/y.png".to_string()]);

    editor
        .edit(&mut store, QuestionEdit::RemoveImage { image: 0 })
        .unwrap();
    assert!(store.questions()[0].img_urls.is_empty());
}

#[test]
fn test_scenario_c_title_tri_state() {
    let (mut store, mut editor) = single(ProblemType::default());
    let title = |store: &QuestionStore| store.questions()[0].problem_types[0].title.clone();
    let untitled = store.questions()[0].clone();
    assert_eq!(title(&store), None);

    editor
        .edit(&mut store, QuestionEdit::AddTitle { problem_type: 0 })
        .unwrap();
    assert_eq!(title(&store), Some(String::new()));

    editor
        .edit(
            &mut store,
            QuestionEdit::SetTitle {
                problem_type: 0,
                text: "Q1".to_string(),
            },
        )
        .unwrap();
    assert_eq!(title(&store), Some("Q1".to_string()));

    editor
        .edit(&mut store, QuestionEdit::RemoveTitle { problem_type: 0 })
        .unwrap();
    assert_eq!(title(&store), None);
    assert_eq!(store.questions()[0], untitled);

    let value = serde_json::to_value(&store.questions()[0]).unwrap();
    assert!(value["problemTypes"][0].get("title").is_none());
}

#[test]
fn test_type_switch_reset_for_every_pair() {
    for from in ProblemKind::ALL {
        for to in ProblemKind::ALL {
            let question = Question::with_problem_type(ProblemType::new(from).with_options(vec![
                AnswerOption::new("x", true),
                AnswerOption::new("y", true),
                AnswerOption::new("z", false),
            ]));

            let next = edit::apply(
                &question,
                &QuestionEdit::ChangeType {
                    problem_type: 0,
                    kind: to,
                },
            )
            .unwrap();

            let pt = &next.problem_types[0];
            assert_eq!(pt.kind(), to);
            assert!(pt.options.iter().all(|o| !o.correct), "{} -> {}", from, to);
            let titles: Vec<_> = pt.options.iter().map(|o| o.title.as_str()).collect();
            assert_eq!(titles, vec!["x", "y", "z"]);
        }
    }
}

#[test]
fn test_exclusivity_holds_over_edit_sequences() {
    for kind in [ProblemKind::Radio, ProblemKind::Select] {
        let mut question = Question::with_problem_type(
            ProblemType::new(kind).with_options(vec![AnswerOption::default(); 4]),
        );
        let sequence = [(0, true), (2, true), (3, true), (2, false), (1, true), (1, true)];

        for (option, checked) in sequence {
            question = edit::apply(
                &question,
                &QuestionEdit::SetOptionCorrectness {
                    problem_type: 0,
                    option,
                    checked,
                },
            )
            .unwrap();
            let count = question.problem_types[0]
                .options
                .iter()
                .filter(|o| o.correct)
                .count();
            assert!(count <= 1);
        }
        assert_eq!(question.problem_types[0].correct_titles().len(), 1);
    }
}

#[test]
fn test_number_payload_survives_kind_round_trip_in_store() {
    let mut number = ProblemType::new(ProblemKind::Number);
    number.set_answer("12");
    let (mut store, mut editor) = single(number);

    for edit in [
        QuestionEdit::SetPreciseness {
            problem_type: 0,
            value: "34%".to_string(),
        },
        QuestionEdit::ChangeType {
            problem_type: 0,
            kind: ProblemKind::Select,
        },
        QuestionEdit::ChangeType {
            problem_type: 0,
            kind: ProblemKind::Number,
        },
    ] {
        editor.edit(&mut store, edit).unwrap();
    }

    let pt = &store.questions()[0].problem_types[0];
    assert_eq!(pt.answer(), Some("12"));
    assert_eq!(pt.preciseness(), Some("34%"));
}

#[test]
fn test_store_default_problem_type_from_config() {
    let config = Config::from_toml_str("default_problem_kind = \"text\"").unwrap();
    let mut store = QuestionStore::from_config(vec![Question::default()], &config);
    let mut editor = QuestionEditor::new();

    editor.edit(&mut store, QuestionEdit::AddProblemType).unwrap();

    let question = &store.questions()[0];
    assert_eq!(question.problem_types.len(), 2);
    assert_eq!(question.problem_types[1].kind(), ProblemKind::Text);
}

#[test]
fn test_load_and_save_lesson_round_trip() {
    let path = temp_path("roundtrip.json");
    let mut question = Question::default();
    question.description = "<p>Speed of light?</p>".to_string();
    question.img_urls.push("http://x/c.png".to_string());

    tokio_test::block_on(save_lesson_file(&path, &[question.clone()])).unwrap();
    let loaded = tokio_test::block_on(load_lesson_file(&path)).unwrap();

    assert_eq!(loaded, vec![question]);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_missing_lesson_file() {
    let err = load_lesson_file(&temp_path("does_not_exist.json"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("文件不存在"));
}

#[tokio::test]
async fn test_edit_session_end_to_end() {
    logging::init(false);

    let lesson = temp_path("lesson.json");
    let script = temp_path("edits.json");
    let output = temp_path("lesson.out.json");
    let log = temp_path("edit_log.txt");

    let lesson_json = json!([
        {
            "description": "<p>Pick one</p>",
            "imgUrls": [],
            "isScaffoldsEnabled": false,
            "problemTypes": [
                {"type": "radio", "options": [
                    {"title": "A", "correct": false},
                    {"title": "B", "correct": false}
                ]}
            ],
            "scaffolds": {"teachMe": "opaque"}
        }
    ]);
    let script_json = json!([
        {"question": 0, "edit": {"op": "setOptionCorrectness", "problemType": 0, "option": 1, "checked": true}},
        {"question": 0, "edit": {"op": "addProblemType"}},
        {"question": 0, "edit": {"op": "changeType", "problemType": 1, "kind": "number"}},
        {"question": 0, "edit": {"op": "setAnswer", "problemType": 1, "value": "3.5"}},
        {"question": 0, "edit": {"op": "setIframeUrl", "url": "http://sim/1"}},
        {"question": 3, "edit": {"op": "addImage"}}
    ]);
    tokio::fs::write(&lesson, lesson_json.to_string()).await.unwrap();
    tokio::fs::write(&script, script_json.to_string()).await.unwrap();

    let config = Config {
        lesson_file: lesson.to_string_lossy().to_string(),
        edit_script_file: script.to_string_lossy().to_string(),
        output_file: output.to_string_lossy().to_string(),
        log_file: log.to_string_lossy().to_string(),
        ..Config::default()
    };

    let stats = EditSession::new(config).run().await.unwrap();
    assert_eq!(stats.applied, 5);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.events.len(), 1);

    let saved = load_lesson_file(&output).await.unwrap();
    let question = &saved[0];
    assert_eq!(question.problem_types[0].correct_titles(), vec!["B"]);
    assert_eq!(question.problem_types[1].kind(), ProblemKind::Number);
    assert_eq!(question.problem_types[1].answer(), Some("3.5"));
    assert_eq!(question.iframe_url.as_deref(), Some("http://sim/1"));
    assert_eq!(question.extra.get("scaffolds"), Some(&json!({"teachMe": "opaque"})));

    let log_content = tokio::fs::read_to_string(&log).await.unwrap();
    assert!(log_content.contains("步骤 6 被拒绝"));

    for path in [lesson, script, output, log] {
        let _ = tokio::fs::remove_file(path).await;
    }
}

#[test]
fn test_view_state_follows_store_active_question() {
    let mut store = QuestionStore::new(
        vec![Question::default(), Question::default(), Question::default()],
        ProblemType::default(),
    );
    let mut editor = QuestionEditor::new();

    editor.edit(&mut store, QuestionEdit::AddImage).unwrap();
    store.set_active(1).unwrap();
    editor.toggle_simulation_view(&store);
    editor
        .edit(&mut store, QuestionEdit::SetIframeUrl { url: "http://sim/2".to_string() })
        .unwrap();
    assert!(editor.view().show_simulation);

    // 删除激活题目后，同一索引上已是另一道题
    store.remove_question(1).unwrap();
    assert_eq!(store.active_question_index(), 1);
    editor.sync_active(&store);
    assert!(!editor.view().show_simulation);
}
