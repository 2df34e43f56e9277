pub mod file;
pub mod project;
pub mod user;
pub mod video;

pub use file::{FileSummary, ProjectFile};
pub use project::{Project, ProjectDetail, ProjectOverview};
pub use user::User;
pub use video::{ProjectVideo, VideoSummary};
