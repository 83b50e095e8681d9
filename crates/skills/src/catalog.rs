//! SkillCatalog - Resolve configured skill ids to instances

use std::sync::Arc;

use shared::{Result, SkillwireError};
use skillwire_domain::Skill;
use tracing::debug;

use crate::builtin::{DatabaseSkill, JavaSkill};

/// Builds a fresh skill instance
pub type SkillFactory = fn() -> Arc<dyn Skill>;

/// Ordered registry of skill factories keyed by id
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    entries: Vec<(String, SkillFactory)>,
}

impl SkillCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in skill, Java first
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(JavaSkill::ID, || Arc::new(JavaSkill));
        catalog.register(DatabaseSkill::ID, || Arc::new(DatabaseSkill));
        catalog
    }

    /// Register a factory; an existing id is replaced in place
    pub fn register(&mut self, id: impl Into<String>, factory: SkillFactory) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((id, factory)),
        }
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == id)
    }

    /// Instantiate one skill
    pub fn create(&self, id: &str) -> Result<Arc<dyn Skill>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, factory)| factory())
            .ok_or_else(|| SkillwireError::UnknownSkill {
                id: id.to_string(),
                available: self.ids().into_iter().map(str::to_string).collect(),
            })
    }

    /// Instantiate skills in the order the ids are given
    ///
    /// Fails on the first unknown id; nothing is returned partially.
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<Arc<dyn Skill>>> {
        let skills = ids
            .iter()
            .map(|id| self.create(id))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = skills.len(), "resolved skills from catalog");
        Ok(skills)
    }
}

/// The standard demo list: Java Programming, then Database Management
pub fn default_skills() -> Vec<Arc<dyn Skill>> {
    vec![Arc::new(JavaSkill) as Arc<dyn Skill>, Arc::new(DatabaseSkill)]
}
