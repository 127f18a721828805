//! Process-section tab selection.
//!
//! Each tab control carries an identifier attribute (`data-tab="2"`); the
//! matching content panel has the id `tab-2-content`. Exactly one control
//! is active after any selection. A panel is only activated if one with
//! the derived id exists; otherwise every panel ends up inactive.

/// Panel id for a tab identifier.
pub fn panel_id_for(tab_id: &str) -> String {
    format!("tab-{}-content", tab_id)
}

/// Result of selecting a tab, applied by the DOM layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChange {
    /// Index of the control that becomes active. All others deactivate.
    pub control: usize,
    /// Panel id to activate. All other panels deactivate.
    pub panel: Option<String>,
}

impl TabChange {
    /// Active flag per panel, given panel ids in document order. At most
    /// one flag is set; none if no panel carries the derived id.
    pub fn panel_flags(&self, panel_ids: &[String]) -> Vec<bool> {
        let mut matched = false;
        panel_ids
            .iter()
            .map(|id| {
                let on = !matched && self.panel.as_deref() == Some(id.as_str());
                matched |= on;
                on
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabSelection {
    /// Identifier per control, in document order. `None` if the control
    /// has no identifier attribute.
    tab_ids: Vec<Option<String>>,
    active: Option<usize>,
}

impl TabSelection {
    pub fn new(tab_ids: Vec<Option<String>>) -> Self {
        Self {
            tab_ids,
            active: None,
        }
    }

    /// Seed the active control from markup (the control already styled active).
    pub fn with_active(mut self, index: Option<usize>) -> Self {
        self.active = index.filter(|i| *i < self.tab_ids.len());
        self
    }

    pub fn len(&self) -> usize {
        self.tab_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab_ids.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.tab_ids.get(i))
            .and_then(|id| id.as_deref())
    }

    /// Panel id that corresponds to the active control.
    pub fn active_panel(&self) -> Option<String> {
        self.active_id().map(panel_id_for)
    }

    /// Activate control `index`. Returns `None` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> Option<TabChange> {
        let tab_id = self.tab_ids.get(index)?;
        let panel = tab_id.as_deref().map(panel_id_for);
        self.active = Some(index);
        Some(TabChange {
            control: index,
            panel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three_tabs() -> TabSelection {
        TabSelection::new(vec![
            Some("1".to_string()),
            Some("2".to_string()),
            Some("3".to_string()),
        ])
    }

    #[test]
    fn panel_id_template() {
        assert_eq!(panel_id_for("2"), "tab-2-content");
        assert_eq!(panel_id_for("discovery"), "tab-discovery-content");
    }

    #[test]
    fn select_activates_control_and_panel() {
        let mut tabs = three_tabs().with_active(Some(0));
        let change = tabs.select(2).unwrap();
        assert_eq!(change.control, 2);
        assert_eq!(change.panel.as_deref(), Some("tab-3-content"));
        assert_eq!(tabs.active(), Some(2));
        assert_eq!(tabs.active_panel().as_deref(), Some("tab-3-content"));
    }

    #[test]
    fn control_without_identifier_activates_no_panel() {
        let mut tabs = TabSelection::new(vec![Some("1".to_string()), None]);
        let change = tabs.select(1).unwrap();
        assert_eq!(change.control, 1);
        assert_eq!(change.panel, None);
        assert_eq!(tabs.active_panel(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut tabs = three_tabs().with_active(Some(1));
        assert!(tabs.select(7).is_none());
        assert_eq!(tabs.active(), Some(1));
    }

    #[test]
    fn seeded_active_out_of_range_is_dropped() {
        let tabs = three_tabs().with_active(Some(9));
        assert_eq!(tabs.active(), None);
    }

    fn panels(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn panel_flags_mark_matching_panel() {
        let mut tabs = three_tabs();
        let change = tabs.select(1).unwrap();
        let flags = change.panel_flags(&panels(&["tab-1-content", "tab-2-content", "tab-3-content"]));
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn missing_panel_activates_nothing() {
        let mut tabs = three_tabs();
        let change = tabs.select(2).unwrap();
        let flags = change.panel_flags(&panels(&["tab-1-content", "tab-2-content"]));
        assert_eq!(flags, vec![false, false]);
    }

    #[test]
    fn duplicate_panel_ids_activate_first_only() {
        let change = TabChange {
            control: 0,
            panel: Some("tab-1-content".into()),
        };
        let flags = change.panel_flags(&panels(&["tab-1-content", "tab-1-content"]));
        assert_eq!(flags, vec![true, false]);
    }

    proptest! {
        #[test]
        fn exactly_one_panel_when_present(
            count in 1usize..6,
            click in 0usize..6,
            drop_panel in any::<bool>(),
        ) {
            let ids: Vec<Option<String>> = (0..count).map(|i| Some(i.to_string())).collect();
            let mut tabs = TabSelection::new(ids);
            let click = click % count;
            let change = tabs.select(click).unwrap();

            let mut panel_ids: Vec<String> = (0..count).map(|i| panel_id_for(&i.to_string())).collect();
            if drop_panel {
                panel_ids.remove(click);
            }
            let active = change.panel_flags(&panel_ids).into_iter().filter(|f| *f).count();
            prop_assert_eq!(active, if drop_panel { 0 } else { 1 });
        }

        #[test]
        fn active_control_and_panel_correspond(clicks in proptest::collection::vec(0usize..3, 1..20)) {
            let mut tabs = three_tabs();
            for click in clicks {
                let change = tabs.select(click).unwrap();
                prop_assert_eq!(tabs.active(), Some(click));
                prop_assert_eq!(change.panel, tabs.active_panel());
            }
        }
    }
}
