use crate::{Task, TaskEdit};

fn sample_task() -> Task {
    Task {
        id: 1,
        title: "Buy milk".to_string(),
        description: "2 liters".to_string(),
        completed: false,
    }
}

#[test]
fn empty_edit_leaves_task_unchanged() {
    let mut task = sample_task();
    let original = task.clone();

    let edit = TaskEdit::default();
    assert!(edit.is_empty());
    edit.apply(&mut task);

    assert_eq!(task, original);
}

#[test]
fn completed_only_edit_preserves_text_fields() {
    let mut task = sample_task();

    let edit = TaskEdit {
        completed: Some(true),
        ..TaskEdit::default()
    };
    edit.apply(&mut task);

    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description, "2 liters");
    assert!(task.completed);
}

#[test]
fn full_edit_overwrites_every_field() {
    let mut task = sample_task();

    let edit = TaskEdit {
        title: Some("Buy bread".to_string()),
        description: Some("one loaf".to_string()),
        completed: Some(true),
    };
    assert!(!edit.is_empty());
    edit.apply(&mut task);

    assert_eq!(task.title, "Buy bread");
    assert_eq!(task.description, "one loaf");
    assert!(task.completed);
}

#[test]
fn edit_never_touches_the_id() {
    let mut task = sample_task();

    let edit = TaskEdit {
        title: Some("Renamed".to_string()),
        ..TaskEdit::default()
    };
    edit.apply(&mut task);

    assert_eq!(task.id, 1);
}
