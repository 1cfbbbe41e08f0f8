pub use super::adoption_request::Entity as AdoptionRequest;
pub use super::dog::Entity as Dog;
pub use super::guardian_request::Entity as GuardianRequest;
pub use super::news::Entity as News;
pub use super::request::Entity as Request;
pub use super::tag::Entity as Tag;
pub use super::tag_dog::Entity as TagDog;
pub use super::tag_news::Entity as TagNews;
pub use super::user::Entity as User;
