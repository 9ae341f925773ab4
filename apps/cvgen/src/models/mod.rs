pub mod cv;

pub use cv::{ContactInfo, CvData, Section, SectionType, MAIN_TYPES, SIDEBAR_TYPES};
