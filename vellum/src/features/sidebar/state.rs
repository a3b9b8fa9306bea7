use super::model::DEFAULT_PANEL_WIDTH;

/// Lifecycle of one resize-handle drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SidebarDrag {
    Idle,
    Dragging { reference_edge: f32 },
}

/// Sidebar layout state: the panel width plus the drag machine.
///
/// The machine only turns pointer positions into raw width reports;
/// clamping stays with the caller that owns the width.
pub(crate) struct SidebarState {
    width: f32,
    drag: SidebarDrag,
}

impl SidebarState {
    pub(crate) fn new() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            drag: SidebarDrag::Idle,
        }
    }

    pub(crate) fn width(&self) -> f32 {
        self.width
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub(crate) fn is_dragging(&self) -> bool {
        matches!(self.drag, SidebarDrag::Dragging { .. })
    }

    /// Enter the dragging state, anchored to the given reference edge.
    ///
    /// A press while already dragging keeps the original anchor.
    pub(crate) fn begin_drag(&mut self, reference_edge: f32) {
        if self.drag == SidebarDrag::Idle {
            self.drag = SidebarDrag::Dragging { reference_edge };
        }
    }

    /// Raw width report for one pointer position, if a drag is live.
    ///
    /// Every pointer move while dragging yields exactly one report and
    /// the value is intentionally unclamped.
    pub(crate) fn drag_report(&self, pointer_x: f32) -> Option<f32> {
        match self.drag {
            SidebarDrag::Dragging { reference_edge } => {
                Some(reference_edge - pointer_x)
            },
            SidebarDrag::Idle => None,
        }
    }

    /// Leave the dragging state. Safe to call in any state.
    pub(crate) fn end_drag(&mut self) {
        self.drag = SidebarDrag::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{SidebarDrag, SidebarState};

    #[test]
    fn given_idle_machine_when_pointer_moves_then_no_reports() {
        let state = SidebarState::new();

        assert_eq!(state.drag_report(400.0), None);
    }

    #[test]
    fn given_live_drag_when_pointer_moves_then_one_report_per_move() {
        let mut state = SidebarState::new();
        state.begin_drag(1000.0);

        let reports: Vec<f32> = [900.0, 850.0, 700.0]
            .into_iter()
            .filter_map(|x| state.drag_report(x))
            .collect();

        assert_eq!(reports, vec![100.0, 150.0, 300.0]);
    }

    #[test]
    fn given_pointer_past_edge_when_dragging_then_report_goes_negative() {
        let mut state = SidebarState::new();
        state.begin_drag(1000.0);

        assert_eq!(state.drag_report(1040.0), Some(-40.0));
    }

    #[test]
    fn given_repeated_press_when_dragging_then_original_anchor_survives() {
        let mut state = SidebarState::new();
        state.begin_drag(1000.0);
        state.begin_drag(1200.0);

        assert_eq!(state.drag, SidebarDrag::Dragging {
            reference_edge: 1000.0
        });
    }

    #[test]
    fn given_ended_drag_when_pointer_moves_then_reports_stop() {
        let mut state = SidebarState::new();
        state.begin_drag(1000.0);
        state.end_drag();

        assert_eq!(state.drag_report(700.0), None);
    }

    #[test]
    fn given_idle_machine_when_ending_drag_then_nothing_changes() {
        let mut state = SidebarState::new();

        state.end_drag();

        assert_eq!(state.drag, SidebarDrag::Idle);
        assert!(!state.is_dragging());
    }
}
