use std::collections::HashSet;
use std::time::Instant;

use crate::app::domain::document::{Tab, TabContent, TabGroup};
use crate::app::domain::messages::{Command, SettingsChange};
use crate::app::domain::settings::SortOrder;
use crate::app::infrastructure::host::{ConfigStore, NotificationHost, ProgressHost, TabHost};

use super::auto_sort::AutoSortListener;
use super::sorter::{sort_active_editor, sort_all_editors};

/// Entry point the host wires its commands and events into. Owns the only
/// state the core keeps between invocations: the in-flight guard and the
/// auto-sort listener handle. Configuration is re-read from the store at
/// every invocation.
pub struct SortEditors {
    sort_in_flight: bool,
    auto_sort: Option<AutoSortListener>,
}

impl SortEditors {
    /// Reads current configuration to decide whether the auto-sort listener
    /// starts armed.
    pub fn new(config: &dyn ConfigStore) -> Self {
        let mut this = Self {
            sort_in_flight: false,
            auto_sort: None,
        };
        this.apply_auto_sorting(config.load().sort_automatically);
        this
    }

    pub fn auto_sorting_active(&self) -> bool {
        self.auto_sort.is_some()
    }

    fn apply_auto_sorting(&mut self, enabled: bool) {
        if enabled {
            if self.auto_sort.is_none() {
                self.auto_sort = Some(AutoSortListener::new());
            }
        } else {
            // Dropping the handle detaches the listener
            self.auto_sort = None;
        }
    }

    /// Host command dispatch. Never returns an error to the host; every
    /// failure surfaces through `notify` instead.
    pub fn run_command(
        &mut self,
        command: Command,
        tabs: &mut dyn TabHost,
        progress: &mut dyn ProgressHost,
        notify: &mut dyn NotificationHost,
        config: &mut dyn ConfigStore,
    ) {
        match command {
            Command::SortActiveEditor => {
                if let Some(doc) = tabs.focused_document() {
                    let opened = HashSet::from([doc.path]);
                    sort_active_editor(tabs, notify, config.load().order, &opened);
                }
            }
            Command::SortActiveTabEditors => {
                let groups: Vec<TabGroup> = tabs.active_group().into_iter().collect();
                self.sort_groups(&groups, tabs, progress, notify, config);
            }
            Command::SortAllEditors => {
                let groups = tabs.tab_groups();
                self.sort_groups(&groups, tabs, progress, notify, config);
            }
            Command::EnableAutoSorting => self.write_auto_sorting(true, notify, config),
            Command::DisableAutoSorting => self.write_auto_sorting(false, notify, config),
        }
    }

    /// Host configuration-change notification, scoped by key. Hosts forward
    /// changes regardless of who wrote them; the enable/disable commands
    /// only write and rely on this path for the reaction.
    pub fn settings_changed(
        &mut self,
        change: SettingsChange,
        tabs: &mut dyn TabHost,
        progress: &mut dyn ProgressHost,
        notify: &mut dyn NotificationHost,
        config: &mut dyn ConfigStore,
    ) {
        let settings = config.load();
        match change {
            SettingsChange::AutoSorting => {
                self.apply_auto_sorting(settings.sort_automatically);
                self.announce_auto_sorting(settings.sort_automatically, tabs, progress, notify, config);
            }
            SettingsChange::Order => {
                self.announce_order_change(settings.order, tabs, progress, notify, config);
            }
        }
    }

    /// Host "tabs opened" event. Only text documents count; a burst arms the
    /// debouncer rather than sorting immediately.
    pub fn tabs_opened<'a>(&mut self, opened: impl IntoIterator<Item = &'a Tab>, now: Instant) {
        let Some(listener) = self.auto_sort.as_mut() else {
            return;
        };
        let paths = opened.into_iter().filter_map(|tab| match &tab.content {
            TabContent::Text { path } => Some(path.clone()),
            _ => None,
        });
        listener.tabs_opened(paths, now);
    }

    /// Periodic tick from the host event loop; runs one debounced pass when
    /// a quiet period has elapsed.
    pub fn tick(
        &mut self,
        now: Instant,
        tabs: &mut dyn TabHost,
        notify: &mut dyn NotificationHost,
        config: &dyn ConfigStore,
    ) {
        let Some(listener) = self.auto_sort.as_mut() else {
            return;
        };
        if let Some(opened) = listener.due(now) {
            sort_active_editor(tabs, notify, config.load().order, &opened);
        }
    }

    fn sort_groups(
        &mut self,
        groups: &[TabGroup],
        tabs: &mut dyn TabHost,
        progress: &mut dyn ProgressHost,
        notify: &mut dyn NotificationHost,
        config: &dyn ConfigStore,
    ) {
        // Overlapping passes would race on tab positions and focus
        if self.sort_in_flight {
            return;
        }
        self.sort_in_flight = true;
        sort_all_editors(tabs, progress, notify, config.load().order, groups);
        self.sort_in_flight = false;
    }

    fn write_auto_sorting(
        &mut self,
        value: bool,
        notify: &mut dyn NotificationHost,
        config: &mut dyn ConfigStore,
    ) {
        if let Err(e) = config.set_sort_automatically(value) {
            notify.error(&e.to_string());
        }
    }

    fn announce_auto_sorting(
        &mut self,
        enabled: bool,
        tabs: &mut dyn TabHost,
        progress: &mut dyn ProgressHost,
        notify: &mut dyn NotificationHost,
        config: &dyn ConfigStore,
    ) {
        if enabled && active_group_has_tabs(tabs) {
            let answer = notify.ask(
                "Automatic Sorting is Enabled. Do you want to sort opened editors?",
                &["Yes", "No"],
            );
            if answer.as_deref() == Some("Yes") {
                let groups: Vec<TabGroup> = tabs.active_group().into_iter().collect();
                self.sort_groups(&groups, tabs, progress, notify, config);
            }
            return;
        }

        notify.info(if enabled {
            "Automatic Sorting is Enabled"
        } else {
            "Automatic Sorting is Disabled"
        });
    }

    fn announce_order_change(
        &mut self,
        order: SortOrder,
        tabs: &mut dyn TabHost,
        progress: &mut dyn ProgressHost,
        notify: &mut dyn NotificationHost,
        config: &dyn ConfigStore,
    ) {
        if active_group_has_tabs(tabs) {
            let answer = notify.ask(
                &format!(
                    "Sorting order changed to {}. Do you want to sort opened editors?",
                    order.as_str()
                ),
                &["Yes", "No"],
            );
            if answer.as_deref() == Some("Yes") {
                let groups: Vec<TabGroup> = tabs.active_group().into_iter().collect();
                self.sort_groups(&groups, tabs, progress, notify, config);
            }
            return;
        }

        notify.info(&format!("Sorting order changed to {}", order.as_str()));
    }
}

fn active_group_has_tabs(tabs: &dyn TabHost) -> bool {
    tabs.active_group().is_some_and(|group| !group.tabs.is_empty())
}

#[cfg(test)]
mod tests {
    use crate::app::domain::document::GroupId;
    use crate::app::domain::settings::SortSettings;
    use crate::app::infrastructure::host::fakes::{
        FakeNotificationHost, FakeProgressHost, FakeTabHost, MemoryConfigStore,
    };
    use std::time::Duration;

    use super::*;

    fn text_tab(path: &str, pinned: bool) -> Tab {
        Tab {
            content: TabContent::Text {
                path: path.to_string(),
            },
            pinned,
        }
    }

    fn group(id: u64, tabs: Vec<Tab>) -> TabGroup {
        TabGroup {
            id: GroupId(id),
            tabs,
        }
    }

    fn two_groups() -> Vec<TabGroup> {
        vec![
            group(
                1,
                vec![text_tab("/g1/b.txt", false), text_tab("/g1/a.txt", false)],
            ),
            group(2, vec![text_tab("/g2/c.txt", false)]),
        ]
    }

    fn config(sort_automatically: bool) -> MemoryConfigStore {
        MemoryConfigStore {
            settings: SortSettings {
                sort_automatically,
                order: SortOrder::Alphabetical,
            },
        }
    }

    #[test]
    fn test_new_arms_listener_from_configuration() {
        assert!(SortEditors::new(&config(true)).auto_sorting_active());
        assert!(!SortEditors::new(&config(false)).auto_sorting_active());
    }

    #[test]
    fn test_sort_active_editor_uses_focused_document() {
        let mut tabs = FakeTabHost::new(two_groups());
        tabs.focused = Some(crate::app::domain::document::OpenDocument {
            path: "/g1/b.txt".to_string(),
            pinned: false,
            group: GroupId(1),
        });
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        editors.run_command(
            Command::SortActiveEditor,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        // b.txt sorts second within its group
        assert_eq!(tabs.move_calls, vec![("/g1/b.txt".to_string(), 2)]);
    }

    #[test]
    fn test_sort_active_editor_without_focus_is_noop() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        editors.run_command(
            Command::SortActiveEditor,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert!(tabs.move_calls.is_empty());
    }

    #[test]
    fn test_sort_active_tab_editors_touches_active_group_only() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        editors.run_command(
            Command::SortActiveTabEditors,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert_eq!(
            tabs.move_calls,
            vec![("/g1/a.txt".to_string(), 1), ("/g1/b.txt".to_string(), 2)]
        );
    }

    #[test]
    fn test_sort_all_editors_spans_every_group() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        editors.run_command(
            Command::SortAllEditors,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert_eq!(
            tabs.move_calls,
            vec![
                ("/g1/a.txt".to_string(), 1),
                ("/g1/b.txt".to_string(), 2),
                ("/g2/c.txt".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_enable_auto_sorting_writes_configuration() {
        let mut tabs = FakeTabHost::new(vec![]);
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        editors.run_command(
            Command::EnableAutoSorting,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );
        assert!(store.settings.sort_automatically);

        editors.run_command(
            Command::DisableAutoSorting,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );
        assert!(!store.settings.sort_automatically);
    }

    #[test]
    fn test_settings_change_arms_and_disarms_listener() {
        let mut tabs = FakeTabHost::new(vec![]);
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        store.settings.sort_automatically = true;
        editors.settings_changed(
            SettingsChange::AutoSorting,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );
        assert!(editors.auto_sorting_active());
        assert_eq!(notify.infos, vec!["Automatic Sorting is Enabled"]);

        store.settings.sort_automatically = false;
        editors.settings_changed(
            SettingsChange::AutoSorting,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );
        assert!(!editors.auto_sorting_active());
        assert_eq!(notify.infos.last().map(String::as_str), Some("Automatic Sorting is Disabled"));
    }

    #[test]
    fn test_auto_sorting_enabled_prompt_sorts_on_yes() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost {
            answer: Some("Yes".to_string()),
            ..Default::default()
        };
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        store.settings.sort_automatically = true;
        editors.settings_changed(
            SettingsChange::AutoSorting,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert_eq!(notify.questions.len(), 1);
        assert!(notify.questions[0].starts_with("Automatic Sorting is Enabled"));
        // Only the active group is sorted from the prompt
        assert_eq!(
            tabs.move_calls,
            vec![("/g1/a.txt".to_string(), 1), ("/g1/b.txt".to_string(), 2)]
        );
    }

    #[test]
    fn test_auto_sorting_enabled_prompt_declined() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost {
            answer: Some("No".to_string()),
            ..Default::default()
        };
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        store.settings.sort_automatically = true;
        editors.settings_changed(
            SettingsChange::AutoSorting,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert!(tabs.move_calls.is_empty());
    }

    #[test]
    fn test_order_change_prompt_names_the_order() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        store.settings.order = SortOrder::FullPath;
        editors.settings_changed(
            SettingsChange::Order,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert_eq!(notify.questions.len(), 1);
        assert!(notify.questions[0].contains("fullPath"));
    }

    #[test]
    fn test_order_change_without_tabs_is_informational() {
        let mut tabs = FakeTabHost::new(vec![]);
        let mut progress = FakeProgressHost::new();
        let mut notify = FakeNotificationHost::default();
        let mut store = config(false);
        let mut editors = SortEditors::new(&store);

        editors.settings_changed(
            SettingsChange::Order,
            &mut tabs,
            &mut progress,
            &mut notify,
            &mut store,
        );

        assert!(notify.questions.is_empty());
        assert_eq!(notify.infos, vec!["Sorting order changed to alphabetical"]);
    }

    #[test]
    fn test_tabs_opened_runs_one_debounced_pass() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut notify = FakeNotificationHost::default();
        let store = config(true);
        let mut editors = SortEditors::new(&store);
        let start = Instant::now();

        let first = [text_tab("/g1/a.txt", false)];
        let second = [text_tab("/g1/b.txt", false)];
        editors.tabs_opened(first.iter(), start);
        editors.tabs_opened(second.iter(), start + Duration::from_millis(100));

        // Quiet period not elapsed yet
        editors.tick(start + Duration::from_millis(150), &mut tabs, &mut notify, &store);
        assert!(tabs.move_calls.is_empty());

        // One pass for the whole burst: the earliest match in the order moves
        editors.tick(start + Duration::from_millis(400), &mut tabs, &mut notify, &store);
        assert_eq!(tabs.move_calls, vec![("/g1/a.txt".to_string(), 1)]);

        // The batch is spent
        editors.tick(start + Duration::from_millis(700), &mut tabs, &mut notify, &store);
        assert_eq!(tabs.move_calls.len(), 1);
    }

    #[test]
    fn test_tabs_opened_ignores_non_text_tabs() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut notify = FakeNotificationHost::default();
        let store = config(true);
        let mut editors = SortEditors::new(&store);
        let start = Instant::now();

        let opened = [Tab {
            content: TabContent::Webview {
                view_type: "preview".to_string(),
            },
            pinned: false,
        }];
        editors.tabs_opened(opened.iter(), start);

        editors.tick(start + Duration::from_secs(1), &mut tabs, &mut notify, &store);
        assert!(tabs.move_calls.is_empty());
    }

    #[test]
    fn test_tabs_opened_ignored_when_auto_sorting_disabled() {
        let mut tabs = FakeTabHost::new(two_groups());
        let mut notify = FakeNotificationHost::default();
        let store = config(false);
        let mut editors = SortEditors::new(&store);
        let start = Instant::now();

        let opened = [text_tab("/g1/a.txt", false)];
        editors.tabs_opened(opened.iter(), start);

        editors.tick(start + Duration::from_secs(1), &mut tabs, &mut notify, &store);
        assert!(tabs.move_calls.is_empty());
    }
}
