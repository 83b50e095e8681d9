//! Domain Models
//!
//! `Skill` is the contract, `Employee` is the aggregate holding an ordered
//! list of skills.

pub mod employee;
pub mod skill;
