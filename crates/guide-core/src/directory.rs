//! Hero directory — fetched list, client-side filter, view selection.
//!
//! Filtering never touches the network: the list is fetched once per
//! page mount and every query runs over the local copy.

use guide_types::{
    event::GuideEvent,
    hero::{Hero, PrimaryAttribute},
};
use crate::event_bus::EventBus;
use crate::ports::HeroApiPort;

pub const LOAD_ERROR: &str = "Failed to load heroes. Please try again later.";

/// Role chips offered above the list, sorted
pub const POPULAR_ROLES: [&str; 9] = [
    "Carry", "Disabler", "Durable", "Escape", "Initiator",
    "Jungler", "Nuker", "Pusher", "Support",
];

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready(Vec<Hero>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

#[derive(Debug, Clone)]
pub struct HeroDirectory {
    pub status: LoadStatus,
    pub query: String,
    pub view: ViewMode,
    /// Primary attribute restriction, on top of the text query
    pub attribute: Option<PrimaryAttribute>,
    pub selected: Option<u32>,
}

impl HeroDirectory {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            query: String::new(),
            view: ViewMode::Grid,
            attribute: None,
            selected: None,
        }
    }

    pub fn with_attribute(attribute: PrimaryAttribute) -> Self {
        Self {
            attribute: Some(attribute),
            ..Self::new()
        }
    }

    /// Fold a fetch result into the directory. Other events are ignored.
    pub fn apply(&mut self, event: &GuideEvent) {
        match event {
            GuideEvent::HeroesLoaded { heroes } => {
                self.status = LoadStatus::Ready(heroes.clone());
            }
            GuideEvent::HeroesFailed { message } => {
                self.status = LoadStatus::Failed(message.clone());
            }
            _ => {}
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn heroes(&self) -> &[Hero] {
        match &self.status {
            LoadStatus::Ready(heroes) => heroes,
            _ => &[],
        }
    }

    pub fn filtered(&self) -> Vec<&Hero> {
        filter_heroes(self.heroes(), &self.query)
            .into_iter()
            .filter(|h| self.attribute.as_ref().map_or(true, |a| &h.primary_attr == a))
            .collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clicking a role chip filters by that exact role string.
    pub fn click_role(&mut self, role: &str) {
        self.query = role.to_string();
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_attribute(&mut self, attribute: Option<PrimaryAttribute>) {
        self.attribute = attribute;
    }

    /// Toggle the detail view for a hero.
    pub fn select(&mut self, id: u32) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        let id = self.selected?;
        self.heroes().iter().find(|h| h.id == id)
    }

    /// "Showing N heroes matching …" line, only while a query is set
    pub fn summary(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        Some(format!(
            "Showing {} heroes matching \"{}\"",
            self.filtered().len(),
            self.query
        ))
    }
}

impl Default for HeroDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match against the display name or any role.
pub fn matches(hero: &Hero, query: &str) -> bool {
    let query = query.to_lowercase();
    hero.display_name().to_lowercase().contains(&query)
        || hero.roles.iter().any(|r| r.to_lowercase().contains(&query))
}

pub fn filter_heroes<'a>(heroes: &'a [Hero], query: &str) -> Vec<&'a Hero> {
    heroes.iter().filter(|h| matches(h, query)).collect()
}

/// Fetch the hero list and publish the outcome on the bus.
pub async fn load_heroes(api: &dyn HeroApiPort, bus: &EventBus) {
    match api.fetch_heroes().await {
        Ok(heroes) => {
            log::info!("Loaded {} heroes", heroes.len());
            bus.emit(GuideEvent::HeroesLoaded { heroes });
        }
        Err(e) => {
            log::error!("Failed to fetch heroes: {}", e);
            bus.emit(GuideEvent::HeroesFailed {
                message: LOAD_ERROR.to_string(),
            });
        }
    }
}
