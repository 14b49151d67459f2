// src/services/mod.rs

pub mod activity_service;
pub mod article_service;
pub mod category_service;
pub mod course_service;
pub mod enrollment_service;
pub mod lesson_service;
pub mod library_material_service;
pub mod user_service;

pub use activity_service::{ActivityApi, ActivityService};
pub use article_service::ArticleService;
pub use category_service::CategoryService;
pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use lesson_service::LessonService;
pub use library_material_service::LibraryMaterialService;
pub use user_service::UserService;
