//! UI rendering modules
//!
//! All rendering logic for the portfolio views, separated into focused
//! submodules:
//! - `header` - Navigation tab bar
//! - `hero` - Landing view
//! - `about` - About view (services, background, certifications)
//! - `projects` - Project cards
//! - `experience` - Career timeline
//! - `skills` - Skill categories with proficiency bars
//! - `contact` - Contact form state and rendering
//! - `theme_picker` - Theme selection overlay
//! - `status_bar` - Key hints and transient status messages

pub mod about;
pub mod contact;
pub mod experience;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod status_bar;
pub mod theme_picker;

pub use about::AboutRenderer;
pub use contact::{ContactForm, ContactRenderer, FormField, SubmitStatus};
pub use experience::ExperienceRenderer;
pub use header::HeaderRenderer;
pub use hero::HeroRenderer;
pub use projects::ProjectsRenderer;
pub use skills::SkillsRenderer;
pub use status_bar::StatusBarRenderer;
pub use theme_picker::ThemePicker;
