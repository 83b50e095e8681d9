//! Built-in skills

use std::io::{self, Write};

use skillwire_domain::Skill;

/// Java programming
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSkill;

impl JavaSkill {
    pub const ID: &'static str = "java";
    pub const NAME: &'static str = "Java Programming";
}

impl Skill for JavaSkill {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn perform(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Writing Java code with Spring Boot!")
    }
}

/// Database management
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseSkill;

impl DatabaseSkill {
    pub const ID: &'static str = "database";
    pub const NAME: &'static str = "Database Management";
}

impl Skill for DatabaseSkill {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn perform(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Managing databases and writing SQL queries!")
    }
}
