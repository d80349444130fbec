// src/types/mod.rs
pub mod cv_data;

pub use cv_data::{
    Certification, CvDocument, Education, Experience, Personal, Project, SectionLabels, SkillGroup,
};
