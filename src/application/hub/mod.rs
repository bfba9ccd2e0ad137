//! Professional Hub application services.

mod errors;
mod professional_hub;
mod registry;
mod view;

pub use errors::HubError;
pub use professional_hub::{HubPorts, ProfessionalHub};
pub use registry::HubRegistry;
pub use view::{
    ArticleView, FieldView, HubView, RepoView, SectionView, StatsView, CONNECT_LEETCODE,
    NO_ARTICLES, NO_REPOSITORIES,
};
