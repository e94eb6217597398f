use std::collections::HashSet;

use crate::app::domain::document::{OpenDocument, TabGroup};
use crate::app::domain::settings::SortOrder;
use crate::app::infrastructure::host::{HostError, NotificationHost, ProgressHost, TabHost};
use crate::app::services::order::sorted_documents;

const PROGRESS_TITLE: &str = "Sorting editors";

/// How a sort-all pass ended. Cancellation is a normal terminal state, not
/// an error; moves already issued stay where they landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Completed,
    Cancelled,
}

/// Single-move variant, used right after new documents open and for the
/// "sort this editor" command: computes the desired order of the active
/// group and moves the first document found in `opened_paths` to its slot.
/// No match is a silent no-op; a host failure is reported once, not retried.
pub fn sort_active_editor(
    tabs: &mut dyn TabHost,
    notify: &mut dyn NotificationHost,
    order: SortOrder,
    opened_paths: &HashSet<String>,
) {
    let Some(group) = tabs.active_group() else {
        return;
    };
    let sorted = sorted_documents(std::slice::from_ref(&group), order);

    for (index, doc) in sorted.iter().enumerate() {
        if opened_paths.contains(&doc.path) {
            if let Err(e) = tabs.move_to_position(doc, index + 1) {
                notify.error(&e.to_string());
            }
            break;
        }
    }
}

/// Full reposition pass over `groups`: walks the desired order index by
/// index, one host round-trip at a time, reporting progress and checking
/// cancellation at every step boundary. Pinned documents are never focused
/// or moved; they already sort last. Per-step failures are reported and the
/// walk continues. Focus returns to the previously focused document in
/// every terminal state.
pub fn sort_all_editors(
    tabs: &mut dyn TabHost,
    progress: &mut dyn ProgressHost,
    notify: &mut dyn NotificationHost,
    order: SortOrder,
    groups: &[TabGroup],
) -> SortOutcome {
    let sorted = sorted_documents(groups, order);
    if sorted.is_empty() {
        return SortOutcome::Completed;
    }

    let previously_focused = tabs.focused_document();
    let increment = 100.0 / sorted.len() as f64;
    let mut session = progress.begin(PROGRESS_TITLE);
    let mut outcome = SortOutcome::Completed;

    for (index, doc) in sorted.iter().enumerate() {
        if session.is_cancelled() {
            outcome = SortOutcome::Cancelled;
            break;
        }

        session.set_message(&format!("{}/{}", index + 1, sorted.len()));

        if !doc.pinned
            && let Err(e) = focus_and_move(tabs, doc, index + 1)
        {
            notify.error(&e.to_string());
        }

        session.advance(increment);
    }

    // Close the progress session before touching focus again
    drop(session);

    if let Some(previous) = previously_focused
        && let Err(e) = tabs.focus(&previous)
    {
        notify.error(&e.to_string());
    }

    outcome
}

/// Bring the document to front in its group, then move it into place.
fn focus_and_move(
    tabs: &mut dyn TabHost,
    doc: &OpenDocument,
    position: usize,
) -> Result<(), HostError> {
    tabs.focus(doc)?;
    tabs.move_to_position(doc, position)
}
