use std::sync::atomic::{AtomicUsize, Ordering};

/// Stable identifier for a placed element.
///
/// Ids are the sole reference to an element across renders and operations;
/// array positions are never used as handles.
pub type ElementId = usize;

// Single static counter for all elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Allocate a fresh, process-unique element id.
pub fn generate_id() -> ElementId {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst)
}

/// Move the counter past `id` so ids loaded from a snapshot can never
/// collide with freshly allocated ones.
pub fn reserve_through(id: ElementId) {
    NEXT_ELEMENT_ID.fetch_max(id + 1, Ordering::SeqCst);
}
