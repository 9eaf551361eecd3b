use egui::{Context, Event, Id, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

use super::{
    Direction, DragItem, DropOutcome, GestureBackend, ItemHints, PointerSample, ReorderList,
    ReorderListResponse, ReorderOptions, ReorderSession, SessionState, StartPolicy, preview_hints,
    show_preview,
};

fn raw_input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
        events,
        ..Default::default()
    }
}

struct Pass {
    response: ReorderListResponse,
    rects: Vec<Rect>,
    hints: Vec<ItemHints>,
}

fn run_list(
    ctx: &Context,
    session: &mut ReorderSession,
    items: &mut Vec<&'static str>,
    events: Vec<Event>,
) -> Pass {
    ctx.begin_pass(raw_input(events));
    let mut rects = Vec::new();
    let mut hints = Vec::new();
    let mut response = None;
    egui::CentralPanel::default().show(ctx, |ui| {
        response = Some(ReorderList::new(session).show(
            ui,
            items,
            |s| *s,
            |ui, item, item_hints| {
                let r = ui.label(*item);
                rects.push(r.rect);
                hints.push(item_hints);
                r
            },
        ));
    });
    let _ = ctx.end_pass();

    Pass {
        response: response.expect("list must be shown"),
        rects,
        hints,
    }
}

fn vertical_session() -> ReorderSession {
    ReorderSession::new(ReorderOptions {
        direction: Direction::Vertical,
        ..Default::default()
    })
}

fn abcd() -> Vec<&'static str> {
    vec!["A", "B", "C", "D"]
}

fn lower_half(rect: Rect) -> Pos2 {
    Pos2::new(rect.center().x, rect.max.y - 1.0)
}

fn upper_half(rect: Rect) -> Pos2 {
    Pos2::new(rect.center().x, rect.min.y + 1.0)
}

fn press_at(pos: Pos2) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        },
    ]
}

fn release_at(pos: Pos2) -> Vec<Event> {
    vec![
        Event::PointerMoved(pos),
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::NONE,
        },
    ]
}

#[test]
fn idle_list_leaves_items_alone() {
    let ctx = Context::default();
    let mut session = vertical_session();
    let mut items = abcd();

    let pass = run_list(&ctx, &mut session, &mut items, Vec::new());
    assert_eq!(items, abcd());
    assert_eq!(pass.rects.len(), 4);
    assert!(pass.response.outcome.is_none());
    assert!(pass.response.pointer.is_none());
    assert_eq!(pass.response.hints.pending_drop_index, None);
    assert!(pass.hints.iter().all(|h| !h.is_dragging && !h.is_disabled));
    assert_eq!(session.state(), SessionState::IDLE);
}

#[test]
fn release_over_the_list_commits_the_candidate() {
    let ctx = Context::default();
    let mut session = vertical_session();
    let mut items = abcd();

    let rects = run_list(&ctx, &mut session, &mut items, Vec::new()).rects;

    // The gesture backend started a drag of "A" during the previous frame.
    session.start_drag(0, rects[0]);
    egui::DragAndDrop::set_payload(
        &ctx,
        DragItem {
            item_type: session.item_type(),
            index: 0,
            data: Id::new("A"),
        },
    );

    let target = lower_half(rects[2]);
    let pass = run_list(
        &ctx,
        &mut session,
        &mut items,
        vec![Event::PointerMoved(target)],
    );
    assert_eq!(session.dragged_index(), Some(0), "queued start applies next frame");
    assert_eq!(pass.response.hints.pending_drop_index, Some(3));
    assert!(pass.hints[0].is_dragging);
    assert!(
        pass.hints.iter().all(|h| h.pending_drop_index == Some(3)),
        "items are drawn with this frame's candidate"
    );
    assert!(pass.response.outcome.is_none());
    assert_eq!(items, abcd());

    let pass = run_list(&ctx, &mut session, &mut items, release_at(target));
    assert_eq!(pass.response.outcome, Some(DropOutcome::Moved { from: 0, to: 2 }));
    assert!(pass.response.reordered());
    assert_eq!(items, vec!["B", "C", "A", "D"]);

    session.end_drag();
    assert_eq!(session.state(), SessionState::IDLE);
}

#[test]
fn payload_of_another_list_is_ignored() {
    let ctx = Context::default();
    let mut session = ReorderSession::new(ReorderOptions {
        direction: Direction::Vertical,
        start_policy: StartPolicy::Immediate,
        ..Default::default()
    });
    let other = vertical_session();
    let mut items = abcd();

    let rects = run_list(&ctx, &mut session, &mut items, Vec::new()).rects;
    session.start_drag(0, rects[0]);
    egui::DragAndDrop::set_payload(
        &ctx,
        DragItem {
            item_type: other.item_type(),
            index: 0,
            data: Id::new("A"),
        },
    );

    let target = lower_half(rects[2]);
    let pass = run_list(&ctx, &mut session, &mut items, release_at(target));
    assert!(pass.response.outcome.is_none());
    assert_eq!(session.pending_drop_index(), Some(0));
    assert_eq!(items, abcd());
}

#[test]
fn disabled_session_is_reported_to_items() {
    let ctx = Context::default();
    let mut session = vertical_session();
    session.set_disabled(true);
    let mut items = abcd();

    let pass = run_list(&ctx, &mut session, &mut items, Vec::new());
    assert!(pass.hints.iter().all(|h| h.is_disabled));
}

fn run_preview(session: &ReorderSession, sample: PointerSample) -> Option<Pos2> {
    let ctx = Context::default();
    ctx.begin_pass(raw_input(Vec::new()));
    let item = "A";
    let hints = preview_hints(session, Some(&item), Some(sample));
    let shown = show_preview(&ctx, session, &hints, |ui, item| {
        ui.label(*item);
        ui.min_rect().min
    });
    let _ = ctx.end_pass();
    shown
}

#[test]
fn preview_is_painted_only_for_touch_sessions() {
    let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(50.0, 30.0));
    let sample = PointerSample {
        initial: Pos2::new(15.0, 25.0),
        current: Pos2::new(115.0, 65.0),
    };

    let mut touch = ReorderSession::new(ReorderOptions {
        backend: GestureBackend::Touch,
        start_policy: StartPolicy::Immediate,
        ..Default::default()
    });
    assert!(run_preview(&touch, sample).is_none(), "no preview while idle");

    touch.start_drag(0, rect);
    let origin = run_preview(&touch, sample).expect("touch drag shows a preview");
    assert!((origin - Pos2::new(110.0, 60.0)).length() < 0.5, "origin={origin:?}");

    let mut pointer = ReorderSession::new(ReorderOptions {
        start_policy: StartPolicy::Immediate,
        ..Default::default()
    });
    pointer.start_drag(0, rect);
    assert!(run_preview(&pointer, sample).is_none());
}

/// Press on `from`, drag to `to` over a few frames and release there, letting egui drive the
/// drag the way a real pointer does.
fn drag_gesture(
    ctx: &Context,
    session: &mut ReorderSession,
    items: &mut Vec<&'static str>,
    from: Pos2,
    to: Pos2,
) -> ReorderListResponse {
    const STEPS: usize = 10;

    run_list(ctx, session, items, press_at(from));
    for step in 1..=STEPS {
        let pos = from.lerp(to, step as f32 / STEPS as f32);
        run_list(ctx, session, items, vec![Event::PointerMoved(pos)]);
    }
    assert!(session.is_dragging(), "egui must have started the drag");
    assert!(egui::DragAndDrop::has_payload_of_type::<DragItem<Id>>(ctx));

    run_list(ctx, session, items, release_at(to)).response
}

#[test]
fn dragging_down_reorders_and_returns_to_idle() {
    let ctx = Context::default();
    let mut session = vertical_session();
    let mut items = abcd();
    let rects = run_list(&ctx, &mut session, &mut items, Vec::new()).rects;

    let response = drag_gesture(
        &ctx,
        &mut session,
        &mut items,
        rects[0].center(),
        lower_half(rects[2]),
    );
    assert_eq!(response.outcome, Some(DropOutcome::Moved { from: 0, to: 2 }));
    assert_eq!(items, vec!["B", "C", "A", "D"]);
    assert_eq!(session.state(), SessionState::IDLE);
    assert!(!session.has_queued_start());
}

#[test]
fn dragging_up_reorders_and_returns_to_idle() {
    let ctx = Context::default();
    let mut session = vertical_session();
    let mut items = abcd();
    let rects = run_list(&ctx, &mut session, &mut items, Vec::new()).rects;

    let response = drag_gesture(
        &ctx,
        &mut session,
        &mut items,
        rects[3].center(),
        upper_half(rects[0]),
    );
    assert_eq!(response.outcome, Some(DropOutcome::Moved { from: 3, to: 0 }));
    assert_eq!(items, vec!["D", "A", "B", "C"]);
    assert_eq!(session.state(), SessionState::IDLE);
}

#[test]
fn release_outside_the_list_cancels_the_drag() {
    let ctx = Context::default();
    let mut session = vertical_session();
    let mut items = abcd();
    let rects = run_list(&ctx, &mut session, &mut items, Vec::new()).rects;

    let response = drag_gesture(
        &ctx,
        &mut session,
        &mut items,
        rects[1].center(),
        Pos2::new(700.0, 500.0),
    );
    assert!(response.outcome.is_none());
    assert_eq!(items, abcd());
    assert_eq!(session.state(), SessionState::IDLE);
}
