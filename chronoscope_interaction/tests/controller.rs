// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `Controller`, driven through a recording surface.

use chronoscope_events::{CategoryRegistry, Dataset, Event, EventId, Significance};
use chronoscope_imaging::Surface;
use chronoscope_imaging_ref::RecordingSurface;
use chronoscope_interaction::{Changes, Command, Controller};
use chronoscope_layout::place;
use chronoscope_view::ZoomTransform;
use kurbo::{Point, Size};

const HASTINGS: EventId = EventId(0);
const MAGNA_CARTA: EventId = EventId(1);

fn controller() -> Controller<RecordingSurface> {
    let dataset = Dataset::new(vec![
        Event::new(1066, "Hastings", Significance::MAX, "war")
            .with_description("Norman conquest of England."),
        Event::new(1215, "Magna Carta", Significance::clamped(3), "politics"),
        Event::new(-776, "First Olympic Games", Significance::clamped(4), "culture"),
    ]);
    let mut controller = Controller::new(dataset, CategoryRegistry::default(), 1000.0, 600.0)
        .expect("dataset has categories");
    controller.attach_surface(RecordingSurface::new(1000.0, 600.0));
    controller
}

fn center(controller: &Controller<RecordingSurface>, id: EventId) -> Point {
    let event = controller.dataset().get(id).unwrap();
    place(event, controller.state().viewport()).center
}

fn frames(controller: &Controller<RecordingSurface>) -> u64 {
    controller.surface().unwrap().frames()
}

const EMPTY_SPACE: Point = Point::new(5.0, 5.0);

#[test]
fn attaching_draws_one_frame() {
    let controller = controller();
    assert_eq!(frames(&controller), 1);
    assert_eq!(controller.surface().unwrap().resizes(), 0);
}

#[test]
fn redraws_only_when_hover_target_changes() {
    let mut controller = controller();
    let hastings = center(&controller, HASTINGS);

    assert_eq!(
        controller.dispatch(Command::PointerMove(hastings)),
        Changes::HOVER
    );
    assert_eq!(frames(&controller), 2);

    let nudged = Point::new(hastings.x + 1.0, hastings.y);
    assert!(controller.dispatch(Command::PointerMove(nudged)).is_empty());
    assert_eq!(frames(&controller), 2);

    assert_eq!(controller.dispatch(Command::PointerLeave), Changes::HOVER);
    assert_eq!(frames(&controller), 3);
    assert_eq!(controller.state().hovered(), None);
}

#[test]
fn click_on_empty_space_deselects() {
    let mut controller = controller();
    let hastings = center(&controller, HASTINGS);

    controller.dispatch(Command::PointerClick(hastings));
    let detail = controller.detail().unwrap();
    assert_eq!(detail.id, HASTINGS);
    assert_eq!(detail.event.description, "Norman conquest of England.");
    assert_eq!(detail.category.label, "war");
    assert!(!detail.category.known);

    assert_eq!(
        controller.dispatch(Command::PointerClick(EMPTY_SPACE)),
        Changes::SELECTION
    );
    assert!(controller.detail().is_none());

    // A second click on empty space changes nothing.
    assert!(controller.dispatch(Command::PointerClick(EMPTY_SPACE)).is_empty());
}

#[test]
fn selection_suppresses_tooltip_until_dismissed() {
    let mut controller = controller();
    let hastings = center(&controller, HASTINGS);

    controller.dispatch(Command::PointerMove(hastings));
    let tooltip = controller.tooltip().unwrap();
    assert_eq!(tooltip.id, HASTINGS);
    assert_eq!(tooltip.event.title, "Hastings");
    assert_eq!(tooltip.pointer, hastings);

    controller.dispatch(Command::PointerClick(hastings));
    assert!(controller.tooltip().is_none());
    // Hover is still tracked underneath the selection.
    assert_eq!(controller.state().hovered(), Some(HASTINGS));

    assert_eq!(controller.dispatch(Command::Dismiss), Changes::SELECTION);
    assert_eq!(controller.tooltip().unwrap().id, HASTINGS);
}

#[test]
fn zoom_scale_is_clamped() {
    let mut controller = controller();
    let changes = controller.dispatch(Command::Zoom(ZoomTransform::new(500.0, -10.0)));
    assert!(changes.contains(Changes::VIEW));
    assert_eq!(controller.state().viewport().scale(), 100.0);
    assert_eq!(frames(&controller), 2);

    // Asking for the same clamped transform again is a no-op.
    assert!(
        controller
            .dispatch(Command::Zoom(ZoomTransform::new(100.0, -10.0)))
            .is_empty()
    );
    assert_eq!(frames(&controller), 2);
}

#[test]
fn filter_never_becomes_empty() {
    let mut controller = controller();
    for category in ["war", "politics"] {
        assert_eq!(
            controller.dispatch(Command::ToggleCategory(category.into())),
            Changes::FILTER
        );
    }
    let before = frames(&controller);
    assert!(
        controller
            .dispatch(Command::ToggleCategory("culture".into()))
            .is_empty()
    );
    assert_eq!(frames(&controller), before);
    assert_eq!(
        controller.state().filter().active().collect::<Vec<_>>(),
        ["culture"]
    );

    assert_eq!(
        controller.dispatch(Command::ShowAllCategories),
        Changes::FILTER
    );
    assert_eq!(controller.state().filter().len(), 3);
}

#[test]
fn unknown_categories_are_ignored() {
    let mut controller = controller();
    assert!(
        controller
            .dispatch(Command::ToggleCategory("bogus".into()))
            .is_empty()
    );
    assert!(!controller.state().filter().is_active("bogus"));

    for category in ["war", "politics"] {
        controller.dispatch(Command::ToggleCategory(category.into()));
    }
    // An unknown key cannot stand in for the last real category.
    assert!(
        controller
            .dispatch(Command::ToggleCategory("bogus".into()))
            .is_empty()
    );
    assert!(
        controller
            .dispatch(Command::ToggleCategory("culture".into()))
            .is_empty()
    );
    assert_eq!(
        controller.state().filter().active().collect::<Vec<_>>(),
        ["culture"]
    );

    let before = frames(&controller);
    assert!(
        controller
            .dispatch(Command::SoloCategory("typo".into()))
            .is_empty()
    );
    assert_eq!(frames(&controller), before);
    assert_eq!(controller.state().filter().len(), 1);
}

#[test]
fn far_pans_draw_without_ticks() {
    let mut controller = controller();
    for x in [2.0e18, -2.0e18, 1.0e300] {
        let changes = controller.dispatch(Command::Zoom(ZoomTransform::new(1.0, x)));
        assert!(changes.contains(Changes::VIEW));
        assert!(controller.surface().unwrap().texts().next().is_none());
    }
    assert_eq!(frames(&controller), 4);
}

#[test]
fn filtering_out_the_hovered_event_clears_hover() {
    let mut controller = controller();
    let hastings = center(&controller, HASTINGS);
    controller.dispatch(Command::PointerMove(hastings));

    let changes = controller.dispatch(Command::ToggleCategory("war".into()));
    assert_eq!(changes, Changes::FILTER | Changes::HOVER);
    assert_eq!(controller.state().hovered(), None);
    assert!(controller.tooltip().is_none());
}

#[test]
fn solo_keeps_only_one_category() {
    let mut controller = controller();
    let magna = center(&controller, MAGNA_CARTA);
    controller.dispatch(Command::PointerClick(magna));
    assert_eq!(controller.state().selected(), Some(MAGNA_CARTA));

    let changes = controller.dispatch(Command::SoloCategory("war".into()));
    assert_eq!(changes, Changes::FILTER | Changes::SELECTION);
    assert_eq!(
        controller.state().filter().active().collect::<Vec<_>>(),
        ["war"]
    );
}

#[test]
fn resize_updates_surface() {
    let mut controller = controller();
    let changes = controller.dispatch(Command::Resize {
        width: 800.0,
        height: 400.0,
        scale_factor: 2.0,
    });
    assert_eq!(changes, Changes::SIZE);

    let surface = controller.surface().unwrap();
    assert_eq!(surface.size(), Size::new(800.0, 400.0));
    assert_eq!(surface.scale_factor(), 2.0);
    assert_eq!(surface.resizes(), 1);
    assert_eq!(surface.frames(), 2);
    assert_eq!(controller.state().viewport().width(), 800.0);
}

#[test]
fn attaching_adopts_surface_scale_factor() {
    let dataset = Dataset::new(vec![Event::new(0, "Zero", Significance::MAX, "misc")]);
    let mut controller: Controller<RecordingSurface> =
        Controller::new(dataset, CategoryRegistry::default(), 640.0, 480.0).unwrap();

    let mut surface = RecordingSurface::new(100.0, 100.0);
    surface.resize(Size::new(100.0, 100.0), 1.5);
    controller.attach_surface(surface);

    assert_eq!(controller.state().scale_factor(), 1.5);
    let surface = controller.surface().unwrap();
    assert_eq!(surface.size(), Size::new(640.0, 480.0));
    assert_eq!(surface.frames(), 1);
}

#[test]
fn commands_apply_without_a_surface() {
    let mut controller = controller();
    let detached = controller.detach_surface().unwrap();
    assert_eq!(detached.frames(), 1);

    let hastings = center(&controller, HASTINGS);
    assert_eq!(
        controller.dispatch(Command::PointerClick(hastings)),
        Changes::SELECTION
    );
    assert_eq!(controller.state().selected(), Some(HASTINGS));
    assert!(controller.surface().is_none());
}
