//! Editing sessions: gestures, subscribers and re-rendering together.

use std::cell::RefCell;
use std::rc::Rc;

use linkmap::interaction::{AreaEditor, AreaEvent, CommitOutcome, GestureKind, ResizeHandle, SaveLog};
use linkmap::model::{Area, Configuration, ContainerSize, Position, Rect};
use linkmap::render::EditorAreaView;
use linkmap::resolve::resolve_area;

fn container() -> ContainerSize {
    ContainerSize::new(1000.0, 500.0)
}

fn page() -> Configuration {
    let mut config = Configuration::new();
    config.areas.push(Area::new(10.0, 20.0, 30.0, 40.0));
    config
}

fn recorder(editor: &mut AreaEditor) -> Rc<RefCell<Vec<AreaEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    editor.events().subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn drag_commits_once_and_is_saved() {
    let mut config = page();
    let mut editor = AreaEditor::for_configuration(&config);
    let store = Rc::new(RefCell::new(SaveLog::default()));
    editor.events().subscribe_persistence(Rc::clone(&store));
    let events = recorder(&mut editor);

    let start = config.areas[0].rect().to_pixel(container());
    assert_eq!(start, Rect::new(100.0, 100.0, 300.0, 200.0));

    assert!(editor.begin_drag(0, start, Position::new(150.0, 150.0)));
    editor.pointer_moved(Position::new(200.0, 180.0));
    editor.pointer_moved(Position::new(250.0, 200.0));
    assert_eq!(config.areas[0].rect(), Rect::new(10.0, 20.0, 30.0, 40.0));

    let outcome = editor.stop(&mut config.areas, container());

    let expected = Rect::new(20.0, 30.0, 30.0, 40.0);
    assert_eq!(outcome, CommitOutcome::Committed { index: 0, rect: expected });
    assert_eq!(config.areas[0].rect(), expected);
    assert_eq!(store.borrow().saves, vec![(0, expected)]);

    let events = events.borrow();
    assert_eq!(
        events.first(),
        Some(&AreaEvent::GestureStarted { index: 0, kind: GestureKind::Drag })
    );
    let previews = events
        .iter()
        .filter(|event| matches!(event, AreaEvent::PreviewMoved { .. }))
        .count();
    assert_eq!(previews, 2);
    assert_eq!(
        &events[events.len() - 2..],
        &[
            AreaEvent::Committed { index: 0, rect: expected },
            AreaEvent::GestureEnded { index: 0 },
        ]
    );
}

#[test]
fn commit_is_visible_to_a_rerender_subscriber() {
    let mut config = page();
    let mut editor = AreaEditor::new(true);

    let rendered = Rc::new(RefCell::new(Vec::new()));
    {
        let mut view_config = config.clone();
        let rendered = Rc::clone(&rendered);
        editor.events().subscribe(move |event| {
            if let AreaEvent::Committed { index, rect } = event {
                view_config.areas[*index].set_rect(*rect);
                let area = &view_config.areas[*index];
                let attrs = resolve_area(area, &view_config, *index);
                let view = EditorAreaView::new(area, &attrs, None);
                rendered.borrow_mut().push(view.style);
            }
        });
    }

    let start = config.areas[0].rect().to_pixel(container());
    editor.begin_resize(0, ResizeHandle::E, start, Position::new(400.0, 200.0));
    editor.pointer_moved(Position::new(350.0, 260.0));
    let outcome = editor.stop(&mut config.areas, container());

    assert_eq!(
        outcome,
        CommitOutcome::Committed { index: 0, rect: Rect::new(10.0, 20.0, 25.0, 40.0) }
    );
    assert_eq!(
        rendered.borrow().as_slice(),
        ["top: 20%; left: 10%; width: 25%; height: 40%;".to_string()]
    );
}

#[test]
fn locking_the_page_mid_gesture_aborts_without_saving() {
    let mut config = page();
    let mut editor = AreaEditor::new(true);
    let store = Rc::new(RefCell::new(SaveLog::default()));
    editor.events().subscribe_persistence(Rc::clone(&store));
    let events = recorder(&mut editor);

    let start = config.areas[0].rect().to_pixel(container());
    editor.begin_drag(0, start, Position::new(150.0, 150.0));
    editor.pointer_moved(Position::new(400.0, 400.0));
    editor.set_editable(false);

    assert!(editor.active_gesture().is_none());
    assert_eq!(editor.stop(&mut config.areas, container()), CommitOutcome::NoGesture);
    assert_eq!(config.areas[0].rect(), Rect::new(10.0, 20.0, 30.0, 40.0));
    assert!(store.borrow().saves.is_empty());
    assert_eq!(
        &events.borrow()[events.borrow().len() - 2..],
        &[AreaEvent::Aborted { index: 0 }, AreaEvent::GestureEnded { index: 0 }]
    );

    assert!(!editor.begin_drag(0, start, Position::new(150.0, 150.0)));
    editor.set_editable(true);
    assert!(editor.begin_drag(0, start, Position::new(150.0, 150.0)));
}

#[test]
fn saves_replay_onto_a_fresh_copy() {
    let mut config = page();
    config.areas.push(Area::new(50.0, 50.0, 10.0, 10.0));
    let pristine = config.clone();

    let mut editor = AreaEditor::for_configuration(&config);
    let store = Rc::new(RefCell::new(SaveLog::default()));
    editor.events().subscribe_persistence(Rc::clone(&store));

    for (index, pointer) in [(0, Position::new(0.0, 0.0)), (1, Position::new(600.0, 300.0))] {
        let start = config.areas[index].rect().to_pixel(container());
        editor.begin_drag(index, start, start.origin);
        editor.pointer_moved(pointer);
        editor.stop(&mut config.areas, container());
    }

    let mut replayed = pristine.areas.clone();
    store.borrow().replay(&mut replayed);
    assert_eq!(replayed, config.areas);
    assert_ne!(replayed, pristine.areas);
}

#[test]
fn unsubscribed_persistence_sees_nothing() {
    let mut config = page();
    let mut editor = AreaEditor::new(true);
    let store = Rc::new(RefCell::new(SaveLog::default()));
    let id = editor.events().subscribe_persistence(Rc::clone(&store));

    assert!(editor.events().unsubscribe(id));
    assert_eq!(editor.events().subscriber_count(), 0);

    let start = config.areas[0].rect().to_pixel(container());
    editor.begin_drag(0, start, start.origin);
    editor.pointer_moved(Position::new(10.0, 10.0));
    assert!(matches!(
        editor.stop(&mut config.areas, container()),
        CommitOutcome::Committed { .. }
    ));
    assert!(store.borrow().saves.is_empty());
}
