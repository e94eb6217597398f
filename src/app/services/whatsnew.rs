use crate::app::infrastructure::host::NotificationHost;
use crate::app::infrastructure::state_store::VersionStore;

const VISIT_ACTION: &str = "Visit GitHub";

/// Compare two semantic versions
/// Returns true when `new` is a release the user has not seen yet; an
/// absent or unparseable stored version counts as never seen.
pub fn version_is_newer(old: &str, new: &str) -> bool {
    let Ok(new) = semver::Version::parse(new) else {
        return false;
    };
    match semver::Version::parse(old) {
        Ok(old) => new > old,
        Err(_) => true,
    }
}

/// Show the release-notes prompt once per new version. Records the version
/// first so a dismissed prompt does not come back on the next activation.
pub fn prompt_release_notes(
    store: &mut VersionStore,
    notify: &mut dyn NotificationHost,
    current_version: &str,
) {
    if !version_is_newer(store.last_seen_version(), current_version) {
        return;
    }

    if let Err(e) = store.set_last_seen_version(current_version) {
        eprintln!("Failed to record last seen version: {}", e);
    }

    let message = format!(
        "Sort Editors has been updated to v{}. Please check the changelog",
        current_version
    );
    if notify.ask(&message, &[VISIT_ACTION]).as_deref() == Some(VISIT_ACTION)
        && let Err(e) = open::that(env!("CARGO_PKG_REPOSITORY"))
    {
        eprintln!("Failed to open repository page: {}", e);
    }
}
