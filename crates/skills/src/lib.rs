//! # Skillwire Skills
//!
//! Concrete [`Skill`](skillwire_domain::Skill) implementations and the
//! catalog the startup code uses to turn configured ids into instances.
//!
//! Adding a skill means writing one more implementation and registering it
//! in [`SkillCatalog::builtin`]; nothing that consumes skills changes.

pub mod builtin;
pub mod catalog;

pub use builtin::{DatabaseSkill, JavaSkill};
pub use catalog::{default_skills, SkillCatalog, SkillFactory};
