//! Top-level editor facade.
//!
//! Routes pointer events to the active editing mode, vertex drags, canvas
//! panning, or hover detection; owns selection, the mode coordinator, the
//! undo history, and the single commit path every structural edit goes
//! through.

use uuid::Uuid;

use crate::constants::{actions, hit};
use crate::events::{Key, PointerEvent};
use crate::history::EditHistory;
use crate::hit_test::{find_polygon_at, find_vertex_at};
use crate::interaction::{InteractionState, SegmentHit, VertexRef};
use crate::model::{Point, Polygon, SegmentationResult};
use crate::modes::{ClickOutcome, EditorMode, ModeManager, TempPoints};
use crate::notify::{LogNotifier, Notifier};
use crate::transform::{ContainerRect, ViewTransform};

/// The interactive segmentation editor.
///
/// All state transitions happen synchronously inside the event handlers;
/// nothing here blocks or awaits. Persistence is the host's job: it reads
/// [`segmentation`](Self::segmentation) when the user asks to save.
pub struct Editor<N: Notifier = LogNotifier> {
    model: SegmentationResult,
    viewport: ViewTransform,
    modes: ModeManager,
    interaction: InteractionState,
    selected: Option<Uuid>,
    hovered_vertex: Option<VertexRef>,
    cursor: Option<Point>,
    shift_held: bool,
    history: EditHistory,
    /// Pre-drag snapshot; becomes one history entry when the drag ends.
    drag_snapshot: Option<SegmentationResult>,
    notifier: N,
}

impl Editor<LogNotifier> {
    /// Create an editor over a segmentation result, reporting through the
    /// `log` facade.
    pub fn new(model: SegmentationResult) -> Self {
        Self::with_notifier(model, LogNotifier)
    }
}

impl<N: Notifier> Editor<N> {
    /// Create an editor with a custom notification sink.
    pub fn with_notifier(model: SegmentationResult, notifier: N) -> Self {
        Self {
            model,
            viewport: ViewTransform::identity(),
            modes: ModeManager::new(),
            interaction: InteractionState::Idle,
            selected: None,
            hovered_vertex: None,
            cursor: None,
            shift_held: false,
            history: EditHistory::new(),
            drag_snapshot: None,
            notifier,
        }
    }

    // ------------------------------------------------------------------
    // Reactive state for overlay rendering
    // ------------------------------------------------------------------

    /// The current segmentation model (single source of truth).
    pub fn segmentation(&self) -> &SegmentationResult {
        &self.model
    }

    /// Replace the model wholesale (new image loaded). Clears selection,
    /// transient state, and history.
    pub fn set_segmentation(&mut self, model: SegmentationResult) {
        self.model = model;
        self.selected = None;
        self.hovered_vertex = None;
        self.cursor = None;
        self.interaction = InteractionState::Idle;
        self.drag_snapshot = None;
        self.modes.deactivate_all();
        self.history.clear();
    }

    pub fn viewport(&self) -> ViewTransform {
        self.viewport
    }

    /// Set the view transform (the host owns zoom gestures).
    pub fn set_viewport(&mut self, viewport: ViewTransform) {
        self.viewport = viewport;
    }

    pub fn selected_polygon_id(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn hovered_vertex(&self) -> Option<VertexRef> {
        self.hovered_vertex
    }

    /// Last known cursor position in image space.
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    /// In-progress free-draw buffer.
    pub fn temp_points(&self) -> &TempPoints {
        self.modes.free_draw.temp_points()
    }

    /// First endpoint of an in-progress cut line.
    pub fn slice_start_point(&self) -> Option<Point> {
        self.modes.slice.start_point()
    }

    /// Edge highlighted by the point-adding mode.
    pub fn hovered_segment(&self) -> Option<SegmentHit> {
        self.modes.add_point.hovered_segment()
    }

    /// The active editing mode, if any.
    pub fn mode(&self) -> Option<EditorMode> {
        self.modes.active()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ------------------------------------------------------------------
    // Selection and modes
    // ------------------------------------------------------------------

    /// Select a polygon (or clear the selection with `None`).
    ///
    /// Switching polygons mid-operation clears all transient state so a
    /// stale partial operation cannot resume against the new target.
    pub fn select_polygon(&mut self, id: Option<Uuid>) {
        if self.selected != id {
            self.modes.clear_transient();
            self.interaction = InteractionState::Idle;
            self.drag_snapshot = None;
        }
        self.selected = id;
        log::debug!("🔍 Selected polygon: {id:?}");
    }

    /// Toggle free-draw mode. Returns `true` if it is active afterwards.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.modes.toggle(EditorMode::FreeDraw)
    }

    /// Toggle slicing mode. Returns `true` if it is active afterwards.
    pub fn toggle_slicing_mode(&mut self) -> bool {
        self.modes.toggle(EditorMode::Slice)
    }

    /// Toggle point-adding mode. Returns `true` if it is active afterwards.
    pub fn toggle_point_adding_mode(&mut self) -> bool {
        self.modes.toggle(EditorMode::AddPoint)
    }

    // ------------------------------------------------------------------
    // Pointer event dispatch
    // ------------------------------------------------------------------

    /// Handle a mouse-down event on the canvas.
    pub fn handle_mouse_down(&mut self, event: PointerEvent, rect: &ContainerRect) {
        let point = self
            .viewport
            .to_image_space(event.screen_x, event.screen_y, rect);

        // 1. An active editing mode owns the click.
        if let Some(mode) = self.modes.active() {
            let outcome = match mode {
                EditorMode::FreeDraw => self.modes.free_draw.handle_click(
                    point,
                    &self.model,
                    self.selected,
                    self.viewport.zoom,
                ),
                EditorMode::Slice => {
                    self.modes.slice.handle_click(point, &self.model, self.selected)
                }
                EditorMode::AddPoint => {
                    self.modes.add_point.handle_click(&self.model, self.selected)
                }
            };
            self.apply_outcome(outcome);
            return;
        }

        // 2. Vertex hit begins a vertex drag and selects its polygon.
        if let Some(vertex) =
            find_vertex_at(&self.model, &point, hit::VERTEX_RADIUS_PX, self.viewport.zoom)
        {
            self.selected = Some(vertex.polygon_id);
            self.drag_snapshot = Some(self.model.clone());
            self.interaction = InteractionState::DraggingVertex { vertex };
            log::debug!(
                "🖐️ Vertex drag started: {} #{}",
                vertex.polygon_id,
                vertex.vertex_index
            );
            return;
        }

        // 3. Interior hit selects without starting a drag.
        if let Some(id) = find_polygon_at(&self.model, &point) {
            self.selected = Some(id);
            log::debug!("🔍 Selected polygon {id}");
            return;
        }

        // 4. Empty canvas: pan and deselect.
        self.selected = None;
        self.interaction = InteractionState::Panning {
            last_x: event.screen_x,
            last_y: event.screen_y,
        };
        log::debug!(
            "🖐️ Pan started at ({:.1}, {:.1})",
            event.screen_x,
            event.screen_y
        );
    }

    /// Handle a mouse-move event on the canvas.
    pub fn handle_mouse_move(&mut self, event: PointerEvent, rect: &ContainerRect) {
        let point = self
            .viewport
            .to_image_space(event.screen_x, event.screen_y, rect);
        self.cursor = Some(point);

        match self.interaction {
            InteractionState::DraggingVertex { vertex } => {
                self.hovered_vertex = None;
                match self.model.with_point_moved(
                    vertex.polygon_id,
                    vertex.vertex_index,
                    point,
                ) {
                    Some(next) => self.model = next,
                    None => {
                        // Polygon vanished mid-drag (undo from another path).
                        self.interaction = InteractionState::Idle;
                        self.drag_snapshot = None;
                    }
                }
            }
            InteractionState::Panning { last_x, last_y } => {
                let dx = event.screen_x - last_x;
                let dy = event.screen_y - last_y;
                self.viewport = self.viewport.pan_by_screen_delta(dx, dy);
                self.interaction = InteractionState::Panning {
                    last_x: event.screen_x,
                    last_y: event.screen_y,
                };
            }
            InteractionState::Idle => match self.modes.active() {
                Some(EditorMode::FreeDraw) => {
                    self.modes.free_draw.handle_move(point, self.shift_held);
                }
                Some(EditorMode::AddPoint) => {
                    self.modes
                        .add_point
                        .handle_move(point, &self.model, self.selected);
                }
                Some(EditorMode::Slice) => {
                    // Cursor position above is all the slice preview needs.
                }
                None => {
                    self.hovered_vertex = find_vertex_at(
                        &self.model,
                        &point,
                        hit::VERTEX_RADIUS_PX,
                        self.viewport.zoom,
                    );
                }
            },
        }
    }

    /// Handle a mouse-up event. Clears drag state unconditionally.
    pub fn handle_mouse_up(&mut self) {
        if let InteractionState::DraggingVertex { .. } = self.interaction {
            // One history entry per completed drag, and only if it moved.
            if let Some(snapshot) = self.drag_snapshot.take() {
                if snapshot != self.model {
                    self.history.push(snapshot);
                }
            }
            log::debug!("🖐️ Vertex drag ended");
        }
        self.interaction = InteractionState::Idle;
        self.drag_snapshot = None;
    }

    /// Handle a key-down event.
    pub fn handle_key_down(&mut self, key: Key) {
        match key {
            Key::Shift => self.shift_held = true,
            Key::Escape => self.cancel_transient(),
        }
    }

    /// Handle a key-up event.
    pub fn handle_key_up(&mut self, key: Key) {
        if key == Key::Shift {
            self.shift_held = false;
        }
    }

    /// Atomically clear all transient state: temp points, slice start,
    /// hovered segment, and any drag in progress. An in-progress vertex
    /// drag is rolled back to its pre-drag snapshot.
    pub fn cancel_transient(&mut self) {
        if let Some(snapshot) = self.drag_snapshot.take() {
            self.model = snapshot;
        }
        self.interaction = InteractionState::Idle;
        self.modes.clear_transient();
        log::debug!("❌ Transient state cancelled");
    }

    // ------------------------------------------------------------------
    // Polygon actions
    // ------------------------------------------------------------------

    /// Clone a polygon with a fresh id, offset so it does not overlap,
    /// and select the duplicate. Returns `false` if the id is stale.
    pub fn duplicate_polygon(&mut self, id: Uuid) -> bool {
        let Some(original) = self.model.polygon(id) else {
            self.notifier.error("Polygon not found");
            return false;
        };
        let points = original
            .points
            .iter()
            .map(|p| p.translated(actions::DUPLICATE_OFFSET, actions::DUPLICATE_OFFSET))
            .collect();
        let duplicate = Polygon::sibling_of(original, points);
        let new_id = duplicate.id;
        let next = self.model.with_polygon_added(duplicate);
        self.commit(next, "Polygon duplicated");
        self.selected = Some(new_id);
        true
    }

    /// Delete a polygon by id. Clears the selection if it pointed at it.
    pub fn delete_polygon(&mut self, id: Uuid) -> bool {
        let Some(next) = self.model.with_polygon_removed(id) else {
            self.notifier.error("Polygon not found");
            return false;
        };
        self.commit(next, "Polygon deleted");
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self
            .hovered_vertex
            .is_some_and(|vertex| vertex.polygon_id == id)
        {
            self.hovered_vertex = None;
        }
        true
    }

    /// Delete the selected polygon, if any.
    pub fn delete_selected_polygon(&mut self) -> bool {
        let Some(id) = self.selected else {
            self.notifier.error("No polygon selected");
            return false;
        };
        self.delete_polygon(id)
    }

    /// Remove one vertex; rejected if the polygon would drop below the
    /// minimum vertex count.
    pub fn delete_vertex(&mut self, id: Uuid, vertex_index: usize) -> bool {
        let Some(next) = self.model.with_point_removed(id, vertex_index) else {
            self.notifier
                .error("Cannot delete vertex: a polygon needs at least 3 points");
            return false;
        };
        self.commit(next, "Vertex deleted");
        true
    }

    /// Insert a copy of a vertex right after it.
    pub fn duplicate_vertex(&mut self, id: Uuid, vertex_index: usize) -> bool {
        let Some(position) = self
            .model
            .polygon(id)
            .and_then(|polygon| polygon.points.get(vertex_index).copied())
        else {
            self.notifier.error("Vertex not found");
            return false;
        };
        let next = self
            .model
            .with_point_inserted(id, vertex_index + 1, position)
            .expect("vertex presence checked above");
        self.commit(next, "Vertex duplicated");
        true
    }

    /// Simplify the selected polygon's outline within the default
    /// tolerance.
    pub fn simplify_selected_polygon(&mut self) -> bool {
        let Some(id) = self.selected else {
            self.notifier.error("No polygon selected");
            return false;
        };
        let Some(polygon) = self.model.polygon(id) else {
            self.notifier.error("Polygon not found");
            return false;
        };
        let before = polygon.points.len();
        let simplified =
            crate::simplify::simplify_ring(&polygon.points, actions::SIMPLIFY_TOLERANCE);
        let after = simplified.len();
        if after == before {
            self.notifier.error("Polygon is already as simple as it gets");
            return false;
        }
        let next = self
            .model
            .with_polygon_points(id, simplified)
            .expect("polygon presence checked above");
        self.commit(next, &format!("Polygon simplified: {before} → {after} points"));
        true
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Undo the last committed edit.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.model) {
            Some(model) => {
                self.model = model;
                self.after_history_jump();
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.model) {
            Some(model) => {
                self.model = model;
                self.after_history_jump();
                true
            }
            None => false,
        }
    }

    /// Drop references that may be stale after the model jumped to a
    /// different version.
    fn after_history_jump(&mut self) {
        if let Some(id) = self.selected {
            if self.model.polygon(id).is_none() {
                self.selected = None;
            }
        }
        self.hovered_vertex = None;
        self.modes.clear_transient();
        self.interaction = InteractionState::Idle;
        self.drag_snapshot = None;
    }

    /// The single commit path: replace the model, record the previous
    /// version for undo, confirm to the user.
    fn commit(&mut self, next: SegmentationResult, message: &str) {
        let previous = std::mem::replace(&mut self.model, next);
        self.history.push(previous);
        self.notifier.success(message);
    }

    fn apply_outcome(&mut self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Committed { model, message } => {
                self.commit(model, &message);
            }
            ClickOutcome::Rejected { message } => {
                self.notifier.error(&message);
            }
            ClickOutcome::Consumed | ClickOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::test_support::RecordingNotifier;

    fn rect() -> ContainerRect {
        ContainerRect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn square(origin: f64, side: f64) -> Vec<Point> {
        vec![
            Point::new(origin, origin),
            Point::new(origin + side, origin),
            Point::new(origin + side, origin + side),
            Point::new(origin, origin + side),
        ]
    }

    fn editor_with_square() -> (Editor<RecordingNotifier>, Uuid) {
        let _ = env_logger::builder().is_test(true).try_init();
        let polygon = Polygon::new(square(0.0, 100.0));
        let id = polygon.id;
        let model = SegmentationResult::new(1000, 1000).with_polygon_added(polygon);
        (
            Editor::with_notifier(model, RecordingNotifier::default()),
            id,
        )
    }

    fn down(editor: &mut Editor<RecordingNotifier>, x: f64, y: f64) {
        editor.handle_mouse_down(PointerEvent::new(x, y), &rect());
    }

    fn drag_move(editor: &mut Editor<RecordingNotifier>, x: f64, y: f64) {
        editor.handle_mouse_move(PointerEvent::new(x, y), &rect());
    }

    #[test]
    fn test_mode_toggles_are_mutually_exclusive() {
        let (mut editor, _) = editor_with_square();
        assert!(editor.toggle_edit_mode());
        down(&mut editor, 300.0, 300.0);
        assert!(!editor.temp_points().points.is_empty());

        assert!(editor.toggle_slicing_mode());
        assert_eq!(editor.mode(), Some(EditorMode::Slice));
        // Free-draw cleanup ran when slicing took over.
        assert!(editor.temp_points().points.is_empty());

        assert!(editor.toggle_point_adding_mode());
        assert_eq!(editor.mode(), Some(EditorMode::AddPoint));

        assert!(!editor.toggle_point_adding_mode());
        assert_eq!(editor.mode(), None);
    }

    #[test]
    fn test_mouse_down_selects_and_drags_vertex() {
        let (mut editor, id) = editor_with_square();
        // Near the (100, 0) corner.
        down(&mut editor, 99.0, 1.0);
        assert_eq!(editor.selected_polygon_id(), Some(id));
        assert!(matches!(
            editor.segmentation().polygon(id),
            Some(polygon) if polygon.points.len() == 4
        ));

        drag_move(&mut editor, 150.0, 50.0);
        let moved = editor.segmentation().polygon(id).unwrap().points[1];
        assert_eq!(moved, Point::new(150.0, 50.0));

        editor.handle_mouse_up();
        assert!(editor.can_undo());
    }

    #[test]
    fn test_vertex_drag_is_immutable_update() {
        let (mut editor, id) = editor_with_square();
        let before = editor.segmentation().clone();

        down(&mut editor, 99.0, 1.0);
        drag_move(&mut editor, 150.0, 50.0);
        editor.handle_mouse_up();

        // The pre-drag snapshot still holds the original geometry.
        assert_eq!(before.polygon(id).unwrap().points[1], Point::new(100.0, 0.0));
        assert_ne!(editor.segmentation(), &before);

        // Undo restores it exactly.
        assert!(editor.undo());
        assert_eq!(editor.segmentation(), &before);
    }

    #[test]
    fn test_zero_move_drag_records_no_history() {
        let (mut editor, _) = editor_with_square();
        down(&mut editor, 99.0, 1.0);
        editor.handle_mouse_up();
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_interior_click_selects_without_drag() {
        let (mut editor, id) = editor_with_square();
        down(&mut editor, 50.0, 50.0);
        assert_eq!(editor.selected_polygon_id(), Some(id));

        // Moving afterwards must not move any vertex.
        let before = editor.segmentation().clone();
        drag_move(&mut editor, 70.0, 70.0);
        assert_eq!(editor.segmentation(), &before);
    }

    #[test]
    fn test_empty_click_pans_and_deselects() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));

        down(&mut editor, 500.0, 500.0);
        assert_eq!(editor.selected_polygon_id(), None);

        drag_move(&mut editor, 510.0, 490.0);
        let offset = editor.viewport().offset;
        assert_eq!(offset, Point::new(10.0, -10.0));

        editor.handle_mouse_up();
        drag_move(&mut editor, 600.0, 600.0);
        // Pan ended: further movement leaves the viewport alone.
        assert_eq!(editor.viewport().offset, offset);
    }

    #[test]
    fn test_pan_respects_zoom() {
        let (mut editor, _) = editor_with_square();
        editor.set_viewport(ViewTransform::new(2.0, Point::new(0.0, 0.0)));
        down(&mut editor, 500.0, 500.0);
        drag_move(&mut editor, 520.0, 500.0);
        assert_eq!(editor.viewport().offset, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_idle_move_computes_hover() {
        let (mut editor, id) = editor_with_square();
        drag_move(&mut editor, 99.0, 1.0);
        let hover = editor.hovered_vertex().unwrap();
        assert_eq!(hover.polygon_id, id);
        assert_eq!(hover.vertex_index, 1);
        assert_eq!(editor.cursor_position(), Some(Point::new(99.0, 1.0)));

        drag_move(&mut editor, 400.0, 400.0);
        assert!(editor.hovered_vertex().is_none());
    }

    #[test]
    fn test_free_draw_full_flow() {
        let (mut editor, _) = editor_with_square();
        editor.toggle_edit_mode();
        down(&mut editor, 300.0, 300.0);
        down(&mut editor, 400.0, 300.0);
        down(&mut editor, 350.0, 400.0);
        down(&mut editor, 301.0, 301.0); // close

        assert_eq!(editor.segmentation().polygons.len(), 2);
        assert_eq!(editor.notifier.successes, vec!["Polygon created"]);
        assert!(editor.can_undo());
        assert!(editor.temp_points().points.is_empty());
    }

    #[test]
    fn test_free_draw_shift_sampling_through_dispatcher() {
        let (mut editor, _) = editor_with_square();
        editor.toggle_edit_mode();
        down(&mut editor, 300.0, 300.0);

        editor.handle_key_down(Key::Shift);
        drag_move(&mut editor, 340.0, 300.0);
        assert_eq!(editor.temp_points().points.len(), 2);

        editor.handle_key_up(Key::Shift);
        drag_move(&mut editor, 400.0, 300.0);
        assert_eq!(editor.temp_points().points.len(), 2);
    }

    #[test]
    fn test_slice_flow_through_dispatcher() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));
        editor.toggle_slicing_mode();

        down(&mut editor, 50.0, -10.0);
        assert_eq!(editor.slice_start_point(), Some(Point::new(50.0, -10.0)));
        down(&mut editor, 50.0, 110.0);

        assert_eq!(editor.segmentation().polygons.len(), 2);
        assert!(editor.segmentation().polygon(id).is_none());
        assert_eq!(editor.notifier.successes, vec!["Polygon split successfully"]);
        // Stays armed.
        assert_eq!(editor.mode(), Some(EditorMode::Slice));
    }

    #[test]
    fn test_slice_without_selection_notifies() {
        let (mut editor, _) = editor_with_square();
        editor.toggle_slicing_mode();
        down(&mut editor, 50.0, -10.0);
        assert_eq!(editor.notifier.errors.len(), 1);
        assert_eq!(editor.segmentation().polygons.len(), 1);
    }

    #[test]
    fn test_point_adding_flow_through_dispatcher() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));
        editor.toggle_point_adding_mode();

        drag_move(&mut editor, 105.0, 50.0);
        assert!(editor.hovered_segment().is_some());
        down(&mut editor, 105.0, 50.0);

        let points = &editor.segmentation().polygon(id).unwrap().points;
        assert_eq!(points.len(), 5);
        assert_eq!(points[2], Point::new(100.0, 50.0));
    }

    #[test]
    fn test_escape_cancels_everything() {
        let (mut editor, id) = editor_with_square();
        editor.toggle_edit_mode();
        down(&mut editor, 300.0, 300.0);
        editor.handle_key_down(Key::Escape);
        assert!(editor.temp_points().points.is_empty());
        // Mode stays armed, buffer gone.
        assert_eq!(editor.mode(), Some(EditorMode::FreeDraw));

        // Escape mid-drag rolls the model back.
        editor.toggle_edit_mode();
        let before = editor.segmentation().clone();
        down(&mut editor, 99.0, 1.0);
        drag_move(&mut editor, 200.0, 200.0);
        assert_ne!(editor.segmentation(), &before);
        editor.handle_key_down(Key::Escape);
        assert_eq!(editor.segmentation(), &before);
        let _ = id;
    }

    #[test]
    fn test_switching_selection_clears_transient() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));
        editor.toggle_slicing_mode();
        down(&mut editor, 50.0, -10.0);
        assert!(editor.slice_start_point().is_some());

        editor.select_polygon(None);
        assert!(editor.slice_start_point().is_none());
    }

    #[test]
    fn test_duplicate_polygon_offsets_and_selects() {
        let (mut editor, id) = editor_with_square();
        assert!(editor.duplicate_polygon(id));
        assert_eq!(editor.segmentation().polygons.len(), 2);

        let new_id = editor.selected_polygon_id().unwrap();
        assert_ne!(new_id, id);
        let duplicate = editor.segmentation().polygon(new_id).unwrap();
        assert_eq!(duplicate.points[0], Point::new(20.0, 20.0));
        assert!(!editor.duplicate_polygon(Uuid::new_v4()));
    }

    #[test]
    fn test_delete_polygon_clears_selection() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));
        assert!(editor.delete_selected_polygon());
        assert!(editor.segmentation().polygons.is_empty());
        assert_eq!(editor.selected_polygon_id(), None);

        assert!(!editor.delete_selected_polygon());
        assert!(!editor.notifier.errors.is_empty());
    }

    #[test]
    fn test_vertex_actions() {
        let (mut editor, id) = editor_with_square();
        assert!(editor.duplicate_vertex(id, 1));
        assert_eq!(editor.segmentation().polygon(id).unwrap().points.len(), 5);

        assert!(editor.delete_vertex(id, 4));
        assert!(editor.delete_vertex(id, 3));
        // Down to 3 points: further deletion is rejected.
        assert!(!editor.delete_vertex(id, 0));
        assert_eq!(editor.segmentation().polygon(id).unwrap().points.len(), 3);
        assert!(!editor.notifier.errors.is_empty());
    }

    #[test]
    fn test_simplify_selected_polygon() {
        let polygon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.2),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]);
        let id = polygon.id;
        let model = SegmentationResult::new(1000, 1000).with_polygon_added(polygon);
        let mut editor = Editor::with_notifier(model, RecordingNotifier::default());

        editor.select_polygon(Some(id));
        assert!(editor.simplify_selected_polygon());
        assert_eq!(editor.segmentation().polygon(id).unwrap().points.len(), 4);

        // Already minimal: rejected, no history entry added.
        let undo_before = editor.can_undo();
        assert!(!editor.simplify_selected_polygon());
        assert_eq!(editor.can_undo(), undo_before);
    }

    #[test]
    fn test_undo_redo_with_stale_selection() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));
        editor.delete_polygon(id);

        assert!(editor.undo());
        assert!(editor.segmentation().polygon(id).is_some());

        assert!(editor.redo());
        assert!(editor.segmentation().polygon(id).is_none());
        assert_eq!(editor.selected_polygon_id(), None);
        assert!(!editor.redo());
    }

    #[test]
    fn test_set_segmentation_resets_everything() {
        let (mut editor, id) = editor_with_square();
        editor.select_polygon(Some(id));
        editor.toggle_edit_mode();
        editor.delete_polygon(id);
        assert!(editor.can_undo());

        editor.set_segmentation(SegmentationResult::new(500, 500));
        assert_eq!(editor.selected_polygon_id(), None);
        assert_eq!(editor.mode(), None);
        assert!(!editor.can_undo());
    }
}
