//! Egui input guard: prevents click-through from UI elements to the scene.
//!
//! When egui (the detail panel) is handling pointer input, scene-level input
//! systems should skip processing so a click on the panel does not also pick
//! a planet behind it.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer — i.e. the cursor is over an
/// egui window or egui is actively handling a drag/click. Input systems
/// should early-return when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
